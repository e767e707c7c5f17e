//! Runtime server configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use config::{Config, ConfigBuilder, builder::DefaultState};
use quip_api::AuthConfig;
use quip_provider::ProviderConfig;
use serde::Deserialize;

/// Server configuration, deserialised from `config.toml` and `QUIP_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  pub store_path:         PathBuf,
  /// Cap on jokes taken from one provider search.
  pub max_fetch:          usize,
  pub provider:           ProviderConfig,
  pub auth_username:      Option<String>,
  pub auth_password_hash: Option<String>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:               "127.0.0.1".to_string(),
      port:               8080,
      store_path:         PathBuf::from("quip.db"),
      max_fetch:          quip_core::MAX_FETCH,
      provider:           ProviderConfig::default(),
      auth_username:      None,
      auth_password_hash: None,
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and layer the environment on top.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    Self::from_builder(
      Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false)),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
    let settings = builder
      .add_source(
        config::Environment::with_prefix("QUIP")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()
      .context("failed to read config")?;

    let config: Self = settings
      .try_deserialize()
      .context("failed to deserialise ServerConfig")?;

    if config.max_fetch == 0 {
      bail!("max_fetch must be at least 1");
    }
    Ok(config)
  }

  /// Credentials for the auth gate. Both fields or neither must be set.
  pub fn auth(&self) -> anyhow::Result<Option<AuthConfig>> {
    match (&self.auth_username, &self.auth_password_hash) {
      (Some(username), Some(password_hash)) => Ok(Some(AuthConfig {
        username:      username.clone(),
        password_hash: password_hash.clone(),
      })),
      (None, None) => Ok(None),
      _ => bail!("auth_username and auth_password_hash must be set together"),
    }
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
