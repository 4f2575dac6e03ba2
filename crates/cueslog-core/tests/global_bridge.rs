//! Installing a channel as the `log` facade backend
//!
//! Lives in its own test binary: a `log` backend can only be installed
//! once per process.

use std::fs;

use cueslog_core::{install_global, LevelFilter, LogError, LoggerRegistry};
use tempfile::tempdir;

#[test]
fn facade_records_reach_the_channel() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("facade.log");
    let registry = LoggerRegistry::new();

    let log = registry.get_or_create(Some("facade"));
    log.attach_file(Some(&path), LevelFilter::All).unwrap();
    install_global(log.clone(), log::LevelFilter::Info).unwrap();

    log::debug!("below the facade max level");
    log::info!("hello from {}", "log::info");
    log::error!("and an error");
    log::logger().flush();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(" facade       : "));
    assert!(lines[0].ends_with("INFO    : hello from log::info"));
    assert!(lines[1].ends_with("ERROR   : and an error"));

    let second = install_global(log, log::LevelFilter::Trace);
    assert!(matches!(second, Err(LogError::AlreadyInstalled)));
}
