use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.port, 3000);
    assert!(cfg.database_url.is_none());
    assert_eq!(cfg.max_snapshot_bytes, 8 * 1024 * 1024);
}

#[test]
fn reads_all_variables() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://localhost/sketch"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("MAX_SNAPSHOT_BYTES", "1024"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/sketch"));
    assert_eq!(cfg.db_max_connections, 12);
    assert_eq!(cfg.max_snapshot_bytes, 1024);
}

#[test]
fn invalid_port_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn blank_database_url_selects_memory_store() {
    let cfg = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
    assert!(cfg.database_url.is_none());
}

#[test]
fn malformed_numeric_limits_fall_back_to_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "lots"), ("MAX_SNAPSHOT_BYTES", "-1")])).unwrap();
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(cfg.max_snapshot_bytes, DEFAULT_MAX_SNAPSHOT_BYTES);
}
