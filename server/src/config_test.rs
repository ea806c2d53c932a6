use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.upstream_url, DEFAULT_UPSTREAM_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS));
}

#[test]
fn upstream_trailing_slashes_are_trimmed() {
    let cfg = config_from(&[("API_UPSTREAM_URL", "https://chat.example.com/")]).unwrap();
    assert_eq!(cfg.upstream_url, "https://chat.example.com");
}

#[test]
fn upstream_without_scheme_is_rejected() {
    let err = config_from(&[("API_UPSTREAM_URL", "chat.example.com")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidUpstream { value: "chat.example.com".to_owned() });
}

#[test]
fn upstream_with_scheme_only_is_rejected() {
    assert!(config_from(&[("API_UPSTREAM_URL", "http://")]).is_err());
}

#[test]
fn explicit_port_and_timeout_are_used() {
    let cfg = config_from(&[("PORT", "8080"), ("UPSTREAM_TIMEOUT_SECS", "30")]).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
}

#[test]
fn invalid_port_is_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "eighty".to_owned() });
    assert!(config_from(&[("PORT", "70000")]).is_err());
}

#[test]
fn zero_timeout_is_rejected() {
    let err = config_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTimeout { value: "0".to_owned() });
}
