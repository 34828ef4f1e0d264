mod common;

use common::temp_config;
use privacy_central::config::{Config, ConfigError};

/// Test that Config::default() carries the demo fixtures.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.fixtures.require_vpn_consent);
    assert!(config.fixtures.blocking_enabled);
    assert_eq!(config.fixtures.apps.len(), 4);
    assert_eq!(config.fixtures.permissions.len(), 3);
    assert_eq!(config.fixtures.trackers.len(), 2);
    assert!(config.fixtures.fake_location.is_none());
    assert_eq!(config.location.random_cities.len(), 8);
    assert!(config.location.rng_seed.is_none());
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("privacy-central/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_missing_file_returns_default() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.fixtures.apps.len(), 4);
}

#[test]
fn test_load_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[location]
rng_seed = 9

[logging]
filter = "privacy_central=debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.location.rng_seed, Some(9));
    assert_eq!(config.location.random_cities.len(), 8);
    assert_eq!(config.logging.filter, "privacy_central=debug");
    assert_eq!(config.fixtures.trackers.len(), 2);
}

#[test]
fn test_load_custom_fixtures() {
    let (_dir, path) = temp_config(
        r#"
[fixtures]
require_vpn_consent = false

[[fixtures.apps]]
package_name = "org.test.one"
uid = 5001
label = "One"

[[fixtures.trackers]]
id = "pixel"
name = "Pixel"
hostname = "pixel.example"
apps = ["org.test.one"]
calls = 3

[fixtures.fake_location]
mode = "custom"
latitude = 10.0
longitude = 20.0
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert!(!config.fixtures.require_vpn_consent);
    assert!(config.fixtures.blocking_enabled);
    assert_eq!(config.fixtures.apps.len(), 1);
    assert!(config.fixtures.permissions.is_empty());
    assert_eq!(config.fixtures.trackers[0].calls, 3);
    assert!(config.fixtures.fake_location.is_some());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[fixtures\nbroken");
    let result = Config::load_from(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_duplicate_uid_fails_validation() {
    let (_dir, path) = temp_config(
        r#"
[[fixtures.apps]]
package_name = "org.test.one"
uid = 5001
label = "One"

[[fixtures.apps]]
package_name = "org.test.two"
uid = 5001
label = "Two"
"#,
    );

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("5001")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_unknown_package_fails_validation() {
    let mut config = Config::default();
    config.fixtures.whitelisted = vec!["org.unknown".to_string()];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("org.unknown"));
}

#[test]
fn test_blocked_app_must_use_tracker() {
    let mut config = Config::default();
    config.fixtures.trackers[1].blocked = vec!["org.example.maps".to_string()];
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_blocked_calls_cannot_exceed_calls() {
    let mut config = Config::default();
    config.fixtures.trackers[0].blocked_calls = 500;
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_city_list_fails_validation() {
    let mut config = Config::default();
    config.location.random_cities.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_out_of_range_fake_location_fails_validation() {
    let (_dir, path) = temp_config(
        r#"
[fixtures.fake_location]
mode = "random"
latitude = 120.0
longitude = 0.0
"#,
    );
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
