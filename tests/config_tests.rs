// Config loading and validation tests

use agentview::config::AppConfig;

const VALID_CONFIG: &str = r#"
[http]
timeout_secs = 10

[output]
padding = "  "
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.http.timeout_secs, 10);
    assert_eq!(config.output.padding, "  ");
}

#[test]
fn test_config_defaults_when_sections_omitted() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.output.padding, " ");
}

#[test]
fn test_config_empty_padding_is_allowed() {
    let config = AppConfig::load_from_str("[output]\npadding = \"\"\n").expect("valid");
    assert_eq!(config.output.padding, "");
}

#[test]
fn test_config_validation_rejects_timeout_zero() {
    let bad = VALID_CONFIG.replace("timeout_secs = 10", "timeout_secs = 0");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("http.timeout_secs"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_config_load_from_file_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("agentview.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let result = AppConfig::load();
    // Missing file is not an error: defaults apply.
    unsafe { std::env::set_var("CONFIG_FILE", dir.path().join("absent.toml").to_str().unwrap()) };
    let missing = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };

    let config = result.expect("load from CONFIG_FILE");
    assert_eq!(config.http.timeout_secs, 10);
    let defaults = missing.expect("defaults for missing file");
    assert_eq!(defaults.http.timeout_secs, 30);
}
