use std::fs;

use device_va_edit::config::{Config, ConfigManager};
use device_va_edit::domain::{DeviceRoutes, Step};
use device_va_edit::errors::EditError;

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().join("va-edit")).expect("manager");
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.routes, DeviceRoutes::default());
    assert!(!manager.path().exists());
}

#[test]
fn saved_config_is_read_back() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    let config = Config {
        routes: DeviceRoutes {
            all: "/inventory".into(),
            unassigned: "/inventory/free".into(),
            assigned: "/inventory/taken".into(),
        },
        default_steps: vec![Step::new(1, "pick"), Step::new(2, "check")],
        log_filter: Some("device_va_edit=debug".into()),
    };
    manager.save(&config).expect("save config");

    assert_eq!(manager.load().expect("reload"), config);
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .expect("list dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn corrupt_config_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    fs::write(manager.path(), "{ not json").expect("write config");

    match manager.load() {
        Err(EditError::Config(message)) => {
            assert!(message.contains("config.json"), "message: {message}")
        }
        other => panic!("expected config error, got {other:?}"),
    }
}
