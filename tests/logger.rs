use datekit::config::LoggingConfig;
use datekit::logger;
use log::{Level, LevelFilter, Record};
use std::fs;

#[test]
fn test_logging_disabled_installs_nothing() {
    let config = LoggingConfig::default();
    assert!(!config.enabled);
    assert_eq!(logger::init(&config).unwrap(), None);
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("datekit/datekit.log"));
    }
}

#[test]
fn test_dispatch_writes_to_file() {
    let temp_dir = std::env::temp_dir().join("datekit_test_logger");
    let _ = fs::remove_dir_all(&temp_dir);
    let log_path = temp_dir.join("logs").join("datekit.log");

    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
    };
    let (level, log) = logger::build_dispatch(&config, &log_path).unwrap().into_log();
    assert_eq!(level, LevelFilter::Debug);

    log.log(
        &Record::builder()
            .args(format_args!("Test message with file"))
            .level(Level::Info)
            .target("datekit::test")
            .build(),
    );
    log.flush();

    let content = fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Test message with file"));
    assert!(content.contains("INFO"));
    assert!(content.contains("datekit::test"));

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_dispatch_rejects_unknown_level() {
    let temp_dir = std::env::temp_dir().join("datekit_test_logger_level");
    let config = LoggingConfig {
        enabled: true,
        level: "loud".to_string(),
    };
    assert!(logger::build_dispatch(&config, &temp_dir.join("datekit.log")).is_err());
    let _ = fs::remove_dir_all(&temp_dir);
}
