//! File-backed setpoint store and config loading, end to end.

use std::fs;

use greenhouse::adapters::setpoint_file::{self, SetpointFile};
use greenhouse::app::ports::SetpointPort;
use greenhouse::app::service::Controller;
use greenhouse::config::ControllerConfig;
use greenhouse::control::Setpoint;

use crate::mock_hw::LogSink;

#[test]
fn first_start_writes_defaults_and_second_start_reads_them() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setpoints.dat");
    let store = SetpointFile::new(&path);

    assert!(!path.exists());
    assert_eq!(store.resolve_targets(Setpoint::DEFAULT), Setpoint::DEFAULT);
    assert_eq!(fs::metadata(&path).unwrap().len(), 8);

    let before = fs::read(&path).unwrap();
    assert_eq!(store.resolve_targets(Setpoint::DEFAULT), Setpoint::DEFAULT);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn controller_update_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = ControllerConfig {
        setpoint_path: dir.path().join("setpoints.dat"),
        ..ControllerConfig::default()
    };
    let store = SetpointFile::new(&config.setpoint_path);

    let mut first = Controller::from_config(&config, &store);
    first
        .update_setpoint(Setpoint::new(22.5, 61.0), &store, &mut LogSink::new())
        .unwrap();

    let restarted = Controller::from_config(&config, &store);
    assert_eq!(restarted.setpoint(), Setpoint::new(22.5, 61.0));
}

#[test]
fn configured_first_run_setpoint_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let config = ControllerConfig {
        setpoint_path: dir.path().join("sp.dat"),
        default_setpoint: Setpoint::new(18.0, 40.0),
        ..ControllerConfig::default()
    };
    let store = SetpointFile::new(&config.setpoint_path);
    let c = Controller::from_config(&config, &store);
    assert_eq!(c.setpoint(), Setpoint::new(18.0, 40.0));
    assert_eq!(setpoint_file::load(&config.setpoint_path), Setpoint::new(18.0, 40.0));
}

#[test]
fn a_saved_zero_degree_target_is_replaced_on_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setpoints.dat");
    setpoint_file::save(&path, &Setpoint::new(0.0, 35.0)).unwrap();

    assert_eq!(setpoint_file::resolve_targets(&path), Setpoint::DEFAULT);
    assert_eq!(setpoint_file::load(&path), Setpoint::DEFAULT);
}

#[test]
fn corrupt_file_is_healed_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setpoints.dat");
    fs::write(&path, b"garbage!!").unwrap();

    assert_eq!(setpoint_file::resolve_targets(&path), Setpoint::DEFAULT);
    assert_eq!(fs::metadata(&path).unwrap().len(), 8);
}

#[test]
fn toml_config_drives_paths_and_limits() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("ghc.toml");
    fs::write(
        &cfg_path,
        r#"
            setpoint_path = "greenhouse.dat"
            update_interval_ms = 500
            max_ticks = 10

            [alarm_limits]
            high_temp = 28.0
            low_temp = 12.0
            high_humidity = 70.0
            low_humidity = 25.0
            high_pressure = 1016.0
            low_pressure = 985.0
        "#,
    )
    .unwrap();

    let config = ControllerConfig::load(&cfg_path).unwrap();
    assert_eq!(config.setpoint_path, std::path::PathBuf::from("greenhouse.dat"));
    assert_eq!(config.max_ticks, Some(10));
    assert_eq!(config.alarm_limits.high_temp, 28.0);
    assert_eq!(config.update_interval().as_millis(), 500);
}

#[test]
fn inverted_limits_in_toml_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("ghc.toml");
    fs::write(
        &cfg_path,
        r#"
            [alarm_limits]
            high_temp = 5.0
            low_temp = 12.0
            high_humidity = 70.0
            low_humidity = 25.0
            high_pressure = 1016.0
            low_pressure = 985.0
        "#,
    )
    .unwrap();

    assert!(ControllerConfig::load(&cfg_path).is_err());
    assert_eq!(
        ControllerConfig::load_or_default(Some(&cfg_path)),
        ControllerConfig::default()
    );
}
