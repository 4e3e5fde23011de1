use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::http::connection::DEFAULT_READ_SIZE;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "HTTPGET_CONFIG";
pub const OUTPUT_ENV: &str = "HTTPGET_OUTPUT";
pub const USER_AGENT_ENV: &str = "HTTPGET_USER_AGENT";
pub const LOG_ENV: &str = "HTTPGET_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File the body or sentinel is written to
    pub output_path: PathBuf,
    pub user_agent: String,
    /// Bytes requested per read; only affects syscall count
    pub read_buffer_size: usize,
    /// Maximum tracing level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output"),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            read_buffer_size: DEFAULT_READ_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then the YAML file named by `HTTPGET_CONFIG`, then the
    /// individual `HTTPGET_*` variables.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = Self::from_config_var(std::env::var(CONFIG_ENV))?;
        cfg.apply_overrides(|key| std::env::var(key).ok());
        cfg.validate()?;
        Ok(cfg)
    }

    /// Base config for a lookup of `HTTPGET_CONFIG`: defaults when unset,
    /// the named file otherwise. A value that is not valid Unicode is an error.
    pub fn from_config_var(value: Result<String, VarError>) -> anyhow::Result<Self> {
        match value {
            Ok(path) => Self::from_file(&path),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => bail!("{CONFIG_ENV} is not valid Unicode: {raw:?}"),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Parses YAML; missing keys keep their defaults.
    pub fn from_yaml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Applies `HTTPGET_*` overrides looked up through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(output) = lookup(OUTPUT_ENV) {
            self.output_path = PathBuf::from(output);
        }
        if let Some(agent) = lookup(USER_AGENT_ENV) {
            self.user_agent = agent;
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.read_buffer_size == 0 {
            bail!("read_buffer_size must be greater than zero");
        }
        if self.user_agent.contains(['\r', '\n']) {
            bail!("user_agent must be a single line");
        }
        self.max_level()?;
        Ok(())
    }

    pub fn max_level(&self) -> anyhow::Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| anyhow::anyhow!("unknown log level {:?}", self.log_level))
    }
}
