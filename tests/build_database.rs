//! An integration test compiling the campus model into an SQLite database.
use campus::campus_model;
use float_cmp::assert_approx_eq;
use genesys::build::build_database;
use genesys::log::is_logger_initialised;
use genesys::settings::Settings;
use itertools::Itertools;
use rusqlite::Connection;
use tempfile::tempdir;

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM \"{table}\""), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn query_column<T: rusqlite::types::FromSql>(conn: &Connection, sql: &str) -> Vec<T> {
    let mut stmt = conn.prepare(sql).unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .map(Result::unwrap)
        .collect()
}

/// Build the database, then check the contents of the tables.
///
/// We also check that the logger is initialised and log files are written.
#[test]
fn test_build_database() {
    unsafe { std::env::set_var("GENESYS_LOG_LEVEL", "off") };
    assert!(!is_logger_initialised());

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("campus.sqlite");
    build_database(&campus_model(), &output_path, Some(Settings::default())).unwrap();

    assert!(is_logger_initialised());
    assert!(dir.path().join("genesys_info.log").is_file());
    assert!(dir.path().join("genesys_error.log").is_file());

    let conn = Connection::open(&output_path).unwrap();

    // Time structure
    assert_eq!(
        query_column::<i64>(
            &conn,
            "SELECT t_periods FROM time_periods WHERE flag = 'e' ORDER BY t_periods"
        ),
        [1990, 2010]
    );
    assert_eq!(
        query_column::<i64>(
            &conn,
            "SELECT t_periods FROM time_periods WHERE flag = 'f' ORDER BY t_periods"
        ),
        [2025, 2030, 2035, 2040, 2045, 2050, 2051]
    );
    assert_eq!(count(&conn, "time_season"), 4);
    assert_eq!(count(&conn, "time_of_day"), 6);
    let segfrac: f64 = conn
        .query_row("SELECT SUM(segfrac) FROM SegFrac", [], |row| row.get(0))
        .unwrap();
    assert_approx_eq!(f64, segfrac, 1.0, epsilon = 1e-9);

    // Entities
    assert_eq!(
        query_column::<String>(&conn, "SELECT comm_name FROM commodities ORDER BY rowid"),
        ["ELC_DEMAND", "HEAT_DEMAND", "ethos", "NATGAS", "ELC", "co2eq"]
    );
    assert_eq!(
        query_column::<String>(&conn, "SELECT sector FROM sector_labels ORDER BY rowid"),
        ["supply", "electric", "heat"]
    );
    assert_eq!(count(&conn, "technologies"), 6);

    // Demand
    assert_eq!(count(&conn, "Demand"), 12);
    let demand_2050: f64 = conn
        .query_row(
            "SELECT demand FROM Demand WHERE demand_comm = 'ELC_DEMAND' AND periods = 2050",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_approx_eq!(f64, demand_2050, 150.0, epsilon = 1e-9);
    assert_eq!(count(&conn, "DemandSpecificDistribution"), 24);

    // Technologies
    assert_eq!(count(&conn, "Efficiency"), 43);
    assert_eq!(
        query_column::<i64>(
            &conn,
            "SELECT vintage FROM Efficiency WHERE tech = 'NG_PLANT' ORDER BY vintage"
        ),
        [2010, 2025, 2030, 2035, 2040, 2045, 2050]
    );
    assert!(
        query_column::<f64>(&conn, "SELECT efficiency FROM Efficiency WHERE tech = 'BOILER'")
            .into_iter()
            .all(|efficiency| (efficiency - 1.0).abs() < 1e-9)
    );
    assert_eq!(
        query_column::<i64>(&conn, "SELECT vintage FROM ExistingCapacity"),
        [2010]
    );
    assert_eq!(count(&conn, "CapacityFactorTech"), 48);
    let solar_peak: f64 = conn
        .query_row(
            "SELECT cf_tech FROM CapacityFactorTech \
            WHERE tech = 'SOLAR' AND season_name = 'S3' AND time_of_day_name = 'H4'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_approx_eq!(f64, solar_peak, 0.8);
    assert_eq!(
        query_column::<i64>(
            &conn,
            "SELECT vintage FROM CostInvest WHERE tech = 'SOLAR' ORDER BY vintage"
        ),
        [2025, 2030, 2040]
    );

    // Every cost is for a vintage which is still operating
    for table in ["CostVariable", "CostFixed"] {
        let invalid = count_where_retired(&conn, table);
        assert_eq!(invalid, 0, "{table} has rows for retired vintages");
    }

    let splits: Vec<(String, f64)> = {
        let mut stmt = conn
            .prepare(
                "SELECT input_comm, ti_split FROM TechInputSplit WHERE periods = 2030 \
                ORDER BY ti_split DESC",
            )
            .unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .map(Result::unwrap)
            .collect_vec()
    };
    assert_eq!(splits, [("NATGAS".into(), 0.8), ("ELC".into(), 0.2)]);
    assert_eq!(count(&conn, "TechInputSplit"), 12);

    // Emissions
    assert_eq!(count(&conn, "EmissionLimit"), 2);
    assert_eq!(count(&conn, "EmissionActivity"), 7);

    // Capabilities and constraints
    assert_eq!(
        query_column::<String>(&conn, "SELECT tech FROM tech_reserve"),
        ["NG_PLANT"]
    );
    assert_eq!(
        query_column::<String>(&conn, "SELECT tech FROM tech_curtailment"),
        ["SOLAR"]
    );
    assert_eq!(
        query_column::<String>(&conn, "SELECT tech FROM StorageDuration"),
        ["BATTERY"]
    );
    assert_eq!(count(&conn, "MinCapacity"), 1);
    assert_eq!(count(&conn, "MaxCapacity"), 1);
    assert_eq!(count(&conn, "PlanningReserveMargin"), 1);
    assert_eq!(count(&conn, "GlobalDiscountRate"), 1);

    // Tables for the optimiser to fill in
    assert_eq!(count(&conn, "Output_Objective"), 0);
    assert_eq!(count(&conn, "Output_VFlow_Out"), 0);

    let mut stmt = conn.prepare("PRAGMA foreign_key_check").unwrap();
    assert!(stmt.query([]).unwrap().next().unwrap().is_none());
}

/// The number of rows in a cost table for vintages which have retired by the given period
fn count_where_retired(conn: &Connection, table: &str) -> i64 {
    conn.query_row(
        &format!(
            "SELECT COUNT(*) FROM \"{table}\" AS c \
            JOIN LifetimeTech AS l ON c.regions = l.regions AND c.tech = l.tech \
            WHERE c.periods - c.vintage < 0 OR c.periods - c.vintage >= l.life"
        ),
        [],
        |row| row.get(0),
    )
    .unwrap()
}
