//! Error types for the publist library.
//!
//! Every failure aborts the whole run: a publication list is either built from
//! every work on the profile or not written at all. The variants below map the
//! ways that can happen:
//! - Registry responses that are not `200 OK`
//! - Bodies that are not JSON
//! - Work or contributor records missing a required field
//! - Years that cannot be sorted numerically
//! - Network, file system, and configuration failures
//!
//! # Examples
//!
//! ```no_run
//! use publist::{error::PublistError, Config, Dialect, Publist};
//!
//! # async fn example() -> Result<(), PublistError> {
//! let publist = Publist::new(Config::default())?;
//! match publist.create_lines("0000-0002-1825-0097", Dialect::Markdown).await {
//!   Err(PublistError::Registry(status)) => println!("registry answered {status}"),
//!   Err(PublistError::InvalidYear(year)) => println!("cannot sort year {year:?}"),
//!   Err(e) => println!("other error: {e}"),
//!   Ok(lines) => println!("{} lines", lines.len()),
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Error type alias used for the [`publist`](crate) crate.
pub type Result<T> = core::result::Result<T, PublistError>;

/// Errors that can occur while fetching and rendering a publication list.
#[derive(Error, Debug)]
pub enum PublistError {
  /// The registry answered with something other than `200 OK`.
  ///
  /// Only the status is kept; the response body is discarded.
  #[error("Registry request failed with status {0}")]
  Registry(StatusCode),

  /// A response body could not be parsed as JSON.
  #[error("Failed to parse registry response: {0}")]
  Parse(#[from] serde_json::Error),

  /// A structurally required field is absent from a record.
  ///
  /// The string is the slash-separated path that was looked up, e.g.
  /// `credit-name/value` or `title/title/value`.
  #[error("Missing required field `{0}`")]
  MissingField(String),

  /// A work's publication year is missing or not an integer.
  ///
  /// An undated work carries an empty string.
  #[error("Publication year {0:?} is missing or not a number")]
  InvalidYear(String),

  /// The ORCID iD does not look like `NNNN-NNNN-NNNN-NNNN`.
  #[error("Invalid ORCID iD {0:?}")]
  InvalidIdentifier(String),

  /// A work put-code from the overview is not a plain number.
  #[error("Invalid put-code {0:?}")]
  InvalidPutCode(String),

  /// A network request failed before a response was received.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - The output directory does not exist
  /// - `publications.txt` cannot be written
  /// - A configuration file cannot be read
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file is not valid TOML for [`Config`](crate::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration value is out of range.
  #[error("{0}")]
  Config(String),
}
