//! The module responsible for writing the compiled model to an SQLite database.
use anyhow::{Context, Result, bail};
use itertools::Itertools;
use log::{debug, warn};
use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use std::fs;
use std::path::Path;

pub mod tables;

/// A row in one of the output tables
pub trait TableRow: std::fmt::Debug {
    /// The name of the table
    const TABLE_NAME: &'static str;
    /// The statement which creates the table
    const CREATE_SQL: &'static str;
    /// The number of columns in the table
    const COLUMN_COUNT: usize;

    /// The values of this row's columns, in order
    fn values(&self) -> Vec<Value>;
}

/// Define a struct representing a row in an output table, along with the table's schema.
///
/// Fields must appear in the same order as the table's columns.
macro_rules! define_table {
    (
        $(#[$meta:meta])*
        $row:ident => $table:literal {
            $($field:ident: $ty:ty),+ $(,)?
        }
        $sql:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        #[allow(missing_docs)]
        pub struct $row {
            $(pub $field: $ty),+
        }

        impl crate::output::TableRow for $row {
            const TABLE_NAME: &'static str = $table;
            const CREATE_SQL: &'static str = $sql;
            const COLUMN_COUNT: usize = [$(stringify!($field)),+].len();

            fn values(&self) -> Vec<rusqlite::types::Value> {
                vec![$(rusqlite::types::Value::from(self.$field.clone())),+]
            }
        }
    };
}
pub(crate) use define_table;

/// A foreign key which refers to a missing row
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyViolation {
    /// The table containing the offending row
    pub table: String,
    /// The row ID of the offending row
    pub row_id: Option<i64>,
    /// The table which should contain the referenced row
    pub parent: String,
}

/// An object for writing tables to an SQLite database.
///
/// Foreign keys are not enforced while writing. Use [`DatabaseWriter::check_foreign_keys`] once all
/// tables have been written.
#[derive(Debug)]
pub struct DatabaseWriter {
    conn: Connection,
}

impl DatabaseWriter {
    /// Create a new database file.
    ///
    /// # Arguments
    ///
    /// * `output_path` - Path to the database file
    /// * `overwrite` - Whether to replace the file if it already exists
    pub fn create(output_path: &Path, overwrite: bool) -> Result<Self> {
        if output_path.exists() {
            if !overwrite {
                bail!(
                    "Output database {} already exists. Enable the overwrite setting to replace it.",
                    output_path.display()
                );
            }

            warn!("Overwriting existing database {}", output_path.display());
            fs::remove_file(output_path)
                .with_context(|| format!("Could not delete {}", output_path.display()))?;
        }

        let conn = Connection::open(output_path)
            .with_context(|| format!("Could not create database {}", output_path.display()))?;

        Self::from_connection(conn)
    }

    /// Create a database which is held in memory
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        // The bundled SQLite enforces foreign keys by default
        conn.pragma_update(None, "foreign_keys", false)
            .context("Could not disable foreign key enforcement")?;

        Ok(Self { conn })
    }

    /// The underlying database connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create a table and fill it with `rows`.
    ///
    /// The table is written in a single transaction, which is committed before returning.
    pub fn write_table<R: TableRow>(&mut self, rows: &[R]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(R::CREATE_SQL)
            .with_context(|| format!("Could not create table {}", R::TABLE_NAME))?;

        {
            let placeholders = (1..=R::COLUMN_COUNT).map(|i| format!("?{i}")).join(", ");
            let insert_sql = format!(
                "INSERT INTO \"{}\" VALUES ({placeholders})",
                R::TABLE_NAME
            );
            let mut stmt = tx.prepare(&insert_sql)?;
            for row in rows {
                stmt.execute(params_from_iter(row.values()))
                    .with_context(|| {
                        format!("Could not insert {row:?} into table {}", R::TABLE_NAME)
                    })?;
            }
        }

        tx.commit()?;
        debug!("Wrote {} rows to table {}", rows.len(), R::TABLE_NAME);

        Ok(())
    }

    /// Create tables which are left empty, to be filled in by the optimiser
    pub fn create_empty_tables(&mut self, tables: &[(&str, &str)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (name, sql) in tables {
            tx.execute_batch(sql)
                .with_context(|| format!("Could not create table {name}"))?;
        }
        tx.commit()?;
        debug!("Created {} empty tables", tables.len());

        Ok(())
    }

    /// Find rows whose foreign keys refer to missing rows
    pub fn foreign_key_violations(&self) -> Result<Vec<ForeignKeyViolation>> {
        let mut stmt = self.conn.prepare("PRAGMA foreign_key_check")?;
        let violations = stmt
            .query_map([], |row| {
                Ok(ForeignKeyViolation {
                    table: row.get(0)?,
                    row_id: row.get(1)?,
                    parent: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(violations)
    }

    /// Log any foreign key violations, returning how many there were
    pub fn check_foreign_keys(&self) -> Result<usize> {
        let violations = self.foreign_key_violations()?;
        for violation in &violations {
            warn!(
                "Row {} of table {} refers to a missing entry in table {}",
                violation
                    .row_id
                    .map_or_else(|| "?".to_string(), |id| id.to_string()),
                violation.table,
                violation.parent
            );
        }

        Ok(violations.len())
    }

    /// Close the database connection
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| err)
            .context("Could not close database")
    }
}
