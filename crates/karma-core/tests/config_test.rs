use std::collections::HashMap;

use karma_core::config::*;
use karma_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = KarmaConfig::from_toml("").unwrap();

    assert_eq!(config.cooldown.seconds, None);
    assert!(config.cooldown.duration().is_none());

    assert!(!config.decay.enabled);
    assert_eq!(config.decay.interval_secs, 2_592_000);

    assert_eq!(config.links.threshold, None);
    assert_eq!(config.terms.pattern, r"\S{2,}");

    assert_eq!(config.storage.db_path, "karma.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
    assert!(config.validate().is_ok());
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let config = KarmaConfig::from_toml(
        r#"
        [cooldown]
        seconds = 60

        [decay]
        enabled = true

        [links]
        threshold = 5
        "#,
    )
    .unwrap();

    assert_eq!(config.cooldown.duration(), Some(chrono::Duration::seconds(60)));
    assert!(config.decay.enabled);
    assert_eq!(config.decay.interval_secs, 2_592_000);
    assert_eq!(config.links.threshold, Some(5));
}

#[test]
fn zero_cooldown_means_disabled() {
    let config = KarmaConfig::from_toml("[cooldown]\nseconds = 0").unwrap();
    assert!(config.cooldown.duration().is_none());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = KarmaConfig::from_toml("[decay\nenabled = true").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_interval_with_decay_enabled_fails_validation() {
    let config = KarmaConfig::from_toml("[decay]\nenabled = true\ninterval_secs = 0").unwrap();
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "decay.interval_secs"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn broken_term_pattern_fails_validation() {
    let config = KarmaConfig::from_toml("[terms]\npattern = \"(unclosed\"").unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn overrides_take_priority_and_ignore_garbage() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("KARMA_COOLDOWN_SECS", "30"),
        ("KARMA_DECAY_ENABLED", "true"),
        ("KARMA_DECAY_INTERVAL_SECS", "not-a-number"),
        ("KARMA_DB_PATH", "/tmp/k.db"),
    ]);
    let mut config = KarmaConfig::default();
    config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

    assert_eq!(config.cooldown.seconds, Some(30));
    assert!(config.decay.enabled);
    assert_eq!(config.decay.interval_secs, 2_592_000);
    assert_eq!(config.storage.db_path, "/tmp/k.db");
    assert_eq!(config.links.threshold, None);
}

#[test]
fn missing_file_is_reported() {
    let err = KarmaConfig::load(Some(std::path::Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}
