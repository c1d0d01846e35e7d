use super::*;

fn scratch() -> (tempfile::TempDir, Settings) {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(dir.path().join("settings.json")).unwrap();
    (dir, settings)
}

#[test]
fn test_defaults() {
    let defaults = Settings::defaults();
    assert_eq!(defaults.get("repo"), Some(&"AEGIS-GAME/aegis".to_string()));
    assert_eq!(defaults.get("comparison"), Some(&"numeric".to_string()));
    assert_eq!(defaults.get("local_source"), Some(&"install-path".to_string()));
    assert_eq!(defaults.get("fallback_version"), Some(&String::new()));
    assert_eq!(defaults.get("tag_prefixes"), Some(&"client-,v".to_string()));
    assert_eq!(defaults.len(), VALID_KEYS.len());
}

#[test]
fn test_typed_accessors_on_defaults() {
    let (_dir, settings) = scratch();
    assert_eq!(settings.comparison(), ComparisonPolicy::Numeric);
    assert_eq!(settings.local_source(), LocalSourceKind::InstallPath);
    assert_eq!(settings.fallback_version(), None);
    assert_eq!(settings.startup_delay(), Duration::from_millis(1000));
    assert_eq!(settings.http_timeout(), Duration::from_secs(10));
    assert_eq!(settings.tag_prefixes(), vec!["client-", "v"]);
    assert_eq!(
        settings.releases_url(),
        "https://github.com/AEGIS-GAME/aegis/releases/latest"
    );
}

#[test]
fn test_validate_key() {
    assert!(validate_key("comparison").is_ok());
    assert!(validate_key("color").is_err());
}

#[test]
fn test_validate_values() {
    assert!(validate_value("comparison", "inequality").is_ok());
    assert!(validate_value("comparison", "semver").is_err());
    assert!(validate_value("repo", "AEGIS-GAME/aegis").is_ok());
    assert!(validate_value("repo", "aegis").is_err());
    assert!(validate_value("repo", "a/b/c").is_err());
    assert!(validate_value("api_base_url", "http://127.0.0.1:8080").is_ok());
    assert!(validate_value("api_base_url", "ftp://example").is_err());
    assert!(validate_value("fallback_version", "").is_ok());
    assert!(validate_value("fallback_version", "2.8.0").is_ok());
    assert!(validate_value("fallback_version", "v2").is_err());
    assert!(validate_value("http_timeout_secs", "0").is_err());
    assert!(validate_value("startup_delay_ms", "0").is_ok());
    assert!(validate_value("local_source", "self-reported").is_ok());
}

#[test]
fn test_set_persists_and_reset_restores() {
    let (dir, mut settings) = scratch();
    settings
        .set("comparison".to_string(), "inequality".to_string())
        .unwrap();
    settings
        .set("fallback_version".to_string(), " 2.7.0 ".to_string())
        .unwrap();

    let reloaded = Settings::load_from(dir.path().join("settings.json")).unwrap();
    assert_eq!(reloaded.comparison(), ComparisonPolicy::Inequality);
    assert_eq!(reloaded.fallback_version().as_deref(), Some("2.7.0"));

    settings.reset("comparison").unwrap();
    let reloaded = Settings::load_from(dir.path().join("settings.json")).unwrap();
    assert_eq!(reloaded.comparison(), ComparisonPolicy::Numeric);
}

#[test]
fn test_rejected_value_is_not_saved() {
    let (dir, mut settings) = scratch();
    assert!(
        settings
            .set("http_timeout_secs".to_string(), "soon".to_string())
            .is_err()
    );
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_unknown_keys_in_file_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"color":"always","repo":"someone/fork"}"#).unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.get("color"), None);
    assert_eq!(settings.repo(), "someone/fork");
}

#[test]
fn test_broken_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "settings {").unwrap();
    assert!(matches!(
        Settings::load_from(&path),
        Err(NoticeError::ConfigError(_))
    ));
}
