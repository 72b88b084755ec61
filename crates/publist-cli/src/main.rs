//! Command line interface for writing an ORCID publication list.
//!
//! Fetches every work on a profile from the ORCID registry and writes them,
//! newest first, to `publications.txt` in the chosen directory.
//!
//! # Usage
//!
//! ```bash
//! # Markdown list in the current directory
//! publist 0000-0002-1825-0097
//!
//! # reStructuredText list in docs/
//! publist 0000-0002-1825-0097 docs/ rst
//!
//! # Four requests in flight, keeping duplicate contributors
//! publist 0000-0002-1825-0097 . md --jobs 4 --keep-duplicates
//! ```
//!
//! Logging verbosity is raised with `-v` (repeatable) or `RUST_LOG`.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use clap::{builder::ArgAction, Parser};
use console::style;
use publist::{contributor::Duplicates, Config, Dialect, Publist};
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

pub mod error;

use crate::error::*;

/// Prefix for information messages
static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
static ERROR_PREFIX: &str = "✗ ";

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Write the publication list of an ORCID profile")]
pub struct Cli {
  /// ORCID iD of the profile, e.g. 0000-0002-1825-0097
  orcid: String,

  /// Directory to write publications.txt into
  #[arg(default_value = "./")]
  path: PathBuf,

  /// Output format: "md" or "rst"; anything else writes plain text.
  /// Defaults to the configured format, which defaults to "md".
  format: Option<String>,

  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Configuration file. If not specified, the platform-specific default is used when present.
  #[arg(long, short)]
  config: Option<PathBuf>,

  /// Registry API root to use instead of the configured one
  #[arg(long)]
  base_url: Option<String>,

  /// Keep contributors whose printed names are identical
  #[arg(long)]
  keep_duplicates: bool,

  /// Number of work records fetched concurrently
  #[arg(long, short)]
  jobs: Option<usize>,

  /// Log every registry request and response
  #[arg(long)]
  log_http: bool,
}

impl Cli {
  /// Merges the configuration file with the command line overrides.
  fn config(&self) -> Result<Config> {
    let mut config = Config::load(self.config.as_deref())?;
    if let Some(base_url) = &self.base_url {
      config = config.with_base_url(base_url.clone());
    }
    if self.keep_duplicates {
      config = config.with_duplicates(Duplicates::Keep);
    }
    if let Some(jobs) = self.jobs {
      if jobs == 0 {
        return Err(PublistCliError::Usage("--jobs must be at least 1".into()));
      }
      config = config.with_concurrency(jobs);
    }
    if self.log_http || self.verbose >= 3 {
      config = config.with_log_http(true);
    }
    Ok(config)
  }

  /// The dialect named on the command line, else the configured one.
  fn dialect(&self, config: &Config) -> Dialect {
    self.format.as_deref().map_or(config.report.format, Dialect::from_selector)
  }
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Fetches the profile and writes the list.
async fn run(cli: &Cli) -> Result<()> {
  let config = cli.config()?;
  let dialect = cli.dialect(&config);
  trace!("Using configuration: {config:?}");
  debug!("Writing {dialect} list for {} into {}", cli.orcid, cli.path.display());

  let publist = Publist::new(config)?;
  println!(
    "{} Fetching works for {}",
    style(INFO_PREFIX).cyan(),
    style(&cli.orcid).yellow()
  );
  let path = publist.export(&cli.orcid, &cli.path, dialect).await?;
  println!("{} Wrote {}", style(SUCCESS_PREFIX).green(), style(path.display()).yellow());
  Ok(())
}

/// Entry point for the publist CLI
///
/// # Errors
///
/// Returns [`PublistCliError`] when the configuration is invalid or any part
/// of fetching, rendering or writing the list fails. No file is written in
/// that case.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  if let Err(e) = run(&cli).await {
    eprintln!("{} {e}", style(ERROR_PREFIX).red());
    return Err(e);
  }
  Ok(())
}
