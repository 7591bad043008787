//! The top-level entry point for compiling a model into an optimiser database.
use crate::compiler::compile;
use crate::log;
use crate::model::Model;
use crate::output::DatabaseWriter;
use crate::settings::Settings;
use ::log::{info, warn};
use anyhow::{Context, Result};
use std::path::Path;

/// The directory containing `output_path`
fn output_dir(output_path: &Path) -> &Path {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Compile `model` into a new SQLite database at `output_path`.
///
/// # Arguments
///
/// * `model` - The model to compile
/// * `output_path` - Path of the database file to create
/// * `settings` - Program settings. If `None`, these are read from `settings.toml` in the same
///   directory as `output_path`.
pub fn build_database(model: &Model, output_path: &Path, settings: Option<Settings>) -> Result<()> {
    let output_dir = output_dir(output_path);
    let settings = match settings {
        Some(settings) => settings,
        None => Settings::from_path(output_dir)?,
    };

    if !log::is_logger_initialised() {
        let log_dir = settings.write_log_files.then_some(output_dir);
        log::init(Some(&settings.log_level), log_dir).context("Failed to initialise logging.")?;
    }

    model
        .parameters
        .validate()
        .context("Invalid simulation parameters.")?;

    let mut writer = DatabaseWriter::create(output_path, settings.overwrite)?;
    compile(model, &mut writer).context("Failed to compile model.")?;

    let violations = writer.check_foreign_keys()?;
    if violations > 0 {
        warn!("Output database has {violations} foreign key violation(s)");
    }
    writer.close()?;

    info!(
        "Database for scenario '{}' written to {}",
        model.parameters.scenario_name,
        output_path.display()
    );

    Ok(())
}
