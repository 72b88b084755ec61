//! Run configuration.
//!
//! Every setting has a default, so a configuration file is optional. When
//! present it is TOML:
//!
//! ```toml
//! [registry]
//! base_url     = "https://pub.orcid.org/v3.0/"
//! log_http     = true
//! timeout_secs = 30
//! concurrency  = 4
//!
//! [report]
//! duplicates = "keep"
//! format     = "rst"
//! ```

use super::*;

/// Top-level configuration for a [`Publist`] run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// How to talk to the registry
  pub registry: RegistryConfig,
  /// How to assemble the report
  pub report:   ReportConfig,
}

/// Settings for the [`Registry`] client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
  /// API root; profile paths are appended to it
  pub base_url:     String,
  /// `User-Agent` header sent with every request
  pub user_agent:   String,
  /// Log requests, statuses and bodies for this run at `info`/`debug`
  pub log_http:     bool,
  /// Per-request timeout; `None` keeps the HTTP client's default
  pub timeout_secs: Option<u64>,
  /// Number of work requests allowed in flight at once
  pub concurrency:  usize,
}

/// Settings for the report builder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
  /// Whether contributors with the same printed name are merged
  pub duplicates: Duplicates,
  /// Dialect used when the caller does not choose one
  pub format:     Dialect,
}

impl Default for RegistryConfig {
  fn default() -> Self {
    Self {
      base_url:     ORCID_API.to_string(),
      user_agent:   BROWSER_USER_AGENT.to_string(),
      log_http:     false,
      timeout_secs: None,
      concurrency:  1,
    }
  }
}

impl FromStr for Config {
  type Err = PublistError;

  fn from_str(toml_str: &str) -> Result<Self> {
    let config: Config = toml::from_str(toml_str)?;
    config.validate()?;
    Ok(config)
  }
}

impl Config {
  /// Default location of the configuration file.
  ///
  /// - On Unix: `~/.config/publist/config.toml`
  /// - On macOS: `~/Library/Application Support/publist/config.toml`
  /// - On Windows: `%APPDATA%\publist\config.toml`
  /// - Fallback: `./publist/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("publist").join("config.toml")
  }

  /// Reads and validates a configuration file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    std::fs::read_to_string(path)?.parse()
  }

  /// Loads `path` if given, else the default file if it exists, else defaults.
  ///
  /// An explicitly given file that cannot be read is an error; a missing
  /// default file is not.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let default_path = Self::default_path();
        if default_path.is_file() {
          Self::from_path(default_path)
        } else {
          trace!("No configuration at {}, using defaults", default_path.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Rejects values the registry client cannot work with.
  pub fn validate(&self) -> Result<()> {
    if self.registry.base_url.trim().is_empty() {
      return Err(PublistError::Config("Registry base URL must not be empty".into()));
    }
    if self.registry.concurrency == 0 {
      return Err(PublistError::Config("Registry concurrency must be at least 1".into()));
    }
    Ok(())
  }

  /// Replaces the registry API root.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.registry.base_url = base_url.into();
    self
  }

  /// Replaces the duplicate-contributor policy.
  pub fn with_duplicates(mut self, duplicates: Duplicates) -> Self {
    self.report.duplicates = duplicates;
    self
  }

  /// Replaces the number of concurrent work requests.
  pub fn with_concurrency(mut self, concurrency: usize) -> Self {
    self.registry.concurrency = concurrency;
    self
  }

  /// Turns per-run HTTP logging on or off.
  pub fn with_log_http(mut self, log_http: bool) -> Self {
    self.registry.log_http = log_http;
    self
  }
}
