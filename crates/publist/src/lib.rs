//! Publication lists from the ORCID registry.
//!
//! `publist` fetches every work on an ORCID profile and renders it as a
//! reference list, providing:
//!
//! - A client for the registry's public JSON API
//! - Typed views of works and their contributors
//! - Reference lines grouped by year, newest first
//! - Markdown and reStructuredText output
//!
//! # Getting Started
//!
//! ```no_run
//! use publist::{Config, Dialect, Publist};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let publist = Publist::new(Config::default())?;
//!
//!   // Write ./publications.txt for this profile
//!   let path = publist.export("0000-0002-1825-0097", ".", Dialect::Markdown).await?;
//!   println!("Wrote {}", path.display());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`registry`]: HTTP access to the registry
//! - [`work`] and [`contributor`]: record model built from registry JSON
//! - [`json`]: safe lookups into nested JSON
//! - [`report`]: sorting, grouping and writing the list
//! - [`dialect`]: markup for links and headings
//! - [`config`]: run configuration
//! - [`error`]: error type shared by all of the above

#![warn(missing_docs)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod contributor;
pub mod dialect;
pub mod error;
pub mod json;
pub mod registry;
pub mod report;
pub mod work;

pub use config::Config;
pub use contributor::Contributor;
pub use dialect::Dialect;
pub use registry::Registry;
pub use work::Work;

use crate::{
  config::RegistryConfig,
  contributor::{dedup_contributors, Duplicates},
  error::*,
  registry::{BROWSER_USER_AGENT, ORCID_API},
};

/// Entry point tying the registry client to the report builder.
///
/// One `Publist` holds one HTTP session; build it once per run.
#[derive(Debug, Clone)]
pub struct Publist {
  /// Validated run configuration
  config:   Config,
  /// Registry client built from `config.registry`
  registry: Registry,
}

impl Publist {
  /// Validates `config` and opens the registry session.
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;
    let registry = Registry::new(&config.registry)?;
    Ok(Self { config, registry })
  }

  /// The configuration this run uses.
  pub fn config(&self) -> &Config { &self.config }

  /// Fetches every work on the profile, in overview order.
  pub async fn fetch_works(&self, orcid: &str) -> Result<Vec<Work>> {
    self.registry.fetch_works(orcid, self.config.report.duplicates).await
  }

  /// Fetches the profile and renders the complete list of report lines.
  pub async fn create_lines(&self, orcid: &str, dialect: Dialect) -> Result<Vec<String>> {
    let works = self.fetch_works(orcid).await?;
    report::build_lines(works, dialect)
  }

  /// Fetches, renders and writes `publications.txt` into `dir`.
  ///
  /// Nothing is written unless every work was fetched and rendered.
  pub async fn export(
    &self,
    orcid: &str,
    dir: impl AsRef<Path>,
    dialect: Dialect,
  ) -> Result<PathBuf> {
    let lines = self.create_lines(orcid, dialect).await?;
    let path = report::write_report(dir, &lines)?;
    info!("Wrote publication list for {orcid} to {}", path.display());
    Ok(path)
  }
}

/// Common types for glob imports.
///
/// ```no_run
/// use publist::prelude::*;
///
/// async fn example() -> Result<(), PublistError> {
///   let publist = Publist::new(Config::default())?;
///   let lines = publist.create_lines("0000-0002-1825-0097", Dialect::ReStructuredText).await?;
///   println!("{}", lines.join("\n"));
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{error::PublistError, Config, Dialect, Publist};
}
