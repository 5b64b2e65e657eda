use std::path::Path;

use tiny_static::config::{Config, DEFAULT_PORT, LISTEN_BACKLOG, MAX_LISTING_ENTRIES};

#[test]
fn test_config_default_address() {
    let cfg = Config::default();

    assert!(cfg.listen_addr.ip().is_loopback());
    assert_eq!(cfg.listen_addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.listen_addr.to_string(), "127.0.0.1:9999");
}

#[test]
fn test_config_default_limits() {
    let cfg = Config::default();

    assert_eq!(cfg.backlog, LISTEN_BACKLOG);
    assert_eq!(cfg.backlog, 1024);
    assert_eq!(cfg.max_listing_entries, MAX_LISTING_ENTRIES);
    assert_eq!(cfg.max_listing_entries, 128);
}

#[test]
fn test_config_serves_working_directory() {
    assert_eq!(Config::default().root, Path::new("."));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.root, cfg2.root);
}
