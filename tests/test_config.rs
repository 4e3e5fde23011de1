use std::collections::HashMap;
use std::env::VarError;
use std::ffi::OsString;
use std::path::PathBuf;

use httpget::config::{CONFIG_ENV, Config, LOG_ENV, OUTPUT_ENV, USER_AGENT_ENV};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.output_path, PathBuf::from("output"));
    assert!(cfg.user_agent.starts_with("httpget/"));
    assert_eq!(cfg.read_buffer_size, 2048);
    assert_eq!(cfg.max_level().unwrap(), tracing::Level::INFO);
}

#[test]
fn test_config_from_yaml_keeps_missing_defaults() {
    let cfg = Config::from_yaml_str("output_path: /tmp/body.bin\nread_buffer_size: 64\n").unwrap();

    assert_eq!(cfg.output_path, PathBuf::from("/tmp/body.bin"));
    assert_eq!(cfg.read_buffer_size, 64);
    assert_eq!(cfg.user_agent, Config::default().user_agent);
}

#[test]
fn test_config_rejects_zero_buffer() {
    assert!(Config::from_yaml_str("read_buffer_size: 0\n").is_err());
}

#[test]
fn test_config_rejects_unknown_keys() {
    assert!(Config::from_yaml_str("listen_addr: 0.0.0.0:80\n").is_err());
}

#[test]
fn test_config_rejects_bad_log_level() {
    assert!(Config::from_yaml_str("log_level: loud\n").is_err());
}

#[test]
fn test_config_rejects_multiline_user_agent() {
    assert!(Config::from_yaml_str("user_agent: \"a\\r\\nX-Injected: 1\"\n").is_err());
}

#[test]
fn test_config_overrides() {
    let vars: HashMap<&str, &str> = [
        (OUTPUT_ENV, "elsewhere"),
        (USER_AGENT_ENV, "custom/1.0"),
        (LOG_ENV, "debug"),
    ]
    .into_iter()
    .collect();

    let mut cfg = Config::default();
    cfg.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(cfg.output_path, PathBuf::from("elsewhere"));
    assert_eq!(cfg.user_agent, "custom/1.0");
    assert_eq!(cfg.max_level().unwrap(), tracing::Level::DEBUG);
}

#[test]
fn test_config_overrides_absent_keep_values() {
    let mut cfg = Config::default();
    cfg.apply_overrides(|_| None);
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_load_from_file_env() {
    let path = std::env::temp_dir().join(format!("httpget-config-{}.yaml", std::process::id()));
    std::fs::write(&path, "user_agent: from-file\n").unwrap();

    unsafe {
        std::env::set_var(CONFIG_ENV, &path);
    }
    let cfg = Config::load();
    unsafe {
        std::env::remove_var(CONFIG_ENV);
    }
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.unwrap().user_agent, "from-file");
}

#[test]
fn test_config_from_missing_file() {
    assert!(Config::from_file("/nonexistent/httpget.yaml").is_err());
}

#[test]
fn test_config_var_unset_uses_defaults() {
    let cfg = Config::from_config_var(Err(VarError::NotPresent)).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_config_var_not_unicode_is_error() {
    let raw = OsString::from("bad-\u{fffd}-path");
    let err = Config::from_config_var(Err(VarError::NotUnicode(raw))).unwrap_err();
    assert!(err.to_string().contains(CONFIG_ENV), "{err}");
}
