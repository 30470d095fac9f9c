use std::fs;
use std::path::Path;
use tracelog::logger::{LoggerError, ModuleLogger};
use tracelog::registry::LoggerRegistry;
use tracelog::settings::LogConfig;
use tracelog::{log_error, log_info};

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Splits `<timestamp> [<LEVEL>] <logger> <message>`.
fn fields(line: &str) -> (&str, &str, &str, &str) {
    let (timestamp, rest) = line.split_once(" [").unwrap();
    let (level, rest) = rest.split_once("] ").unwrap();
    let (logger, message) = rest.split_once(' ').unwrap();
    (timestamp, level, logger, message)
}

fn save_state(logger: &ModuleLogger) {
    log_error!(logger, "disk full");
}

#[test]
fn error_from_save_state() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig::with_file(tmp.path().join("trace.log"));
    let registry = LoggerRegistry::new();
    let logger = ModuleLogger::in_registry(&registry, "/srv/app/state.py", &config).unwrap();

    save_state(&logger);

    let lines = read_lines(&config.file);
    assert_eq!(lines.len(), 1);
    let (timestamp, level, name, message) = fields(&lines[0]);
    let (seconds, millis) = timestamp.split_once(',').unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(seconds, "%Y-%m-%d %H:%M:%S").is_ok());
    assert!(millis.len() == 3 && millis.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(level, "ERROR");
    assert_eq!(name, "state.py");
    assert_eq!(message, "save_state - disk full");
}

#[test]
fn message_is_kept_verbatim() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig::with_file(tmp.path().join("trace.log"));
    let registry = LoggerRegistry::new();
    let logger = ModuleLogger::in_registry(&registry, "verbatim.rs", &config).unwrap();

    let messages = ["plain", "  padded  ", "50% done {not a placeholder}", "ünïcødé <tag>"];
    for msg in messages {
        log_info!(logger, "{}", msg);
    }

    let lines = read_lines(&config.file);
    assert_eq!(lines.len(), messages.len());
    for (line, msg) in lines.iter().zip(messages) {
        let (_, _, _, message) = fields(line);
        assert_eq!(message, format!("message_is_kept_verbatim - {msg}"));
    }
}

#[test]
fn same_base_name_duplicates_lines() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig::with_file(tmp.path().join("trace.log"));
    let registry = LoggerRegistry::new();

    let a = ModuleLogger::in_registry(&registry, "one/x.py", &config).unwrap();
    a.info("step", "first");
    assert_eq!(read_lines(&config.file).len(), 1);

    let b = ModuleLogger::in_registry(&registry, "two/x.py", &config).unwrap();
    assert_eq!(a.name(), b.name());
    assert_eq!(b.handler_count(), 2);

    b.info("step", "second");
    let lines = read_lines(&config.file);
    assert_eq!(lines.len(), 3);
    assert!(lines[1..].iter().all(|line| line.ends_with("x.py step - second")));
}

#[test]
fn threshold_from_config() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig {
        filter: "warn".to_string(),
        ..LogConfig::with_file(tmp.path().join("trace.log"))
    };
    let registry = LoggerRegistry::new();
    let logger = ModuleLogger::in_registry(&registry, "quiet.rs", &config).unwrap();

    logger.debug("f", "dropped");
    logger.info("f", "dropped");
    logger.warn("f", "kept");

    let lines = read_lines(&config.file);
    assert_eq!(lines.len(), 1);
    assert_eq!(fields(&lines[0]).1, "WARNING");
}

#[test]
fn invalid_filter_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig {
        filter: "everything".to_string(),
        ..LogConfig::with_file(tmp.path().join("trace.log"))
    };

    let result = ModuleLogger::in_registry(&LoggerRegistry::new(), "x.rs", &config);
    assert!(matches!(result, Err(LoggerError::InvalidFilter(_))));
}

#[test]
fn global_registry_is_shared() {
    let tmp = tempfile::tempdir().unwrap();
    let config = LogConfig::with_file(tmp.path().join("trace.log"));

    let logger = ModuleLogger::with_config("tests/global_registry_check.rs", &config).unwrap();
    let entry = LoggerRegistry::global().get("global_registry_check.rs").unwrap();
    assert_eq!(entry.name(), logger.name());
    assert_eq!(entry.handler_count(), logger.handler_count());
}
