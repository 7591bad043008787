//! An integration test for replacing an existing output database.
use campus::campus_model;
use genesys::build::build_database;
use genesys::settings::Settings;
use rusqlite::Connection;
use tempfile::tempdir;

/// An existing database is only replaced if the overwrite setting is enabled.
///
/// Log files are disabled, so none should be written beside the database.
#[test]
fn test_build_database_overwrite() {
    unsafe { std::env::set_var("GENESYS_LOG_LEVEL", "off") };

    let dir = tempdir().unwrap();
    let output_path = dir.path().join("campus.sqlite");
    let settings = |overwrite| Settings {
        overwrite,
        write_log_files: false,
        ..Settings::default()
    };

    build_database(&campus_model(), &output_path, Some(settings(false))).unwrap();
    assert!(!dir.path().join("genesys_info.log").exists());

    let mut model = campus_model();
    model.parameters.scenario_name = "replacement".into();
    assert_eq!(
        build_database(&model, &output_path, Some(settings(false)))
            .unwrap_err()
            .chain()
            .next()
            .unwrap()
            .to_string(),
        format!(
            "Output database {} already exists. Enable the overwrite setting to replace it.",
            output_path.display()
        )
    );

    // Halve the discount rate so we can tell the databases apart
    model.parameters.discount_rate = 0.025;
    build_database(&model, &output_path, Some(settings(true))).unwrap();
    let conn = Connection::open(&output_path).unwrap();
    let rate: f64 = conn
        .query_row("SELECT rate FROM GlobalDiscountRate", [], |row| row.get(0))
        .unwrap();
    assert!((rate - 0.025).abs() < 1e-12);
}
