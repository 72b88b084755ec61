//! Error type for the `publist` command line tool.

use publist::error::PublistError;
use thiserror::Error;

/// Error type alias used by the CLI.
pub type Result<T> = core::result::Result<T, PublistCliError>;

/// Errors that end a `publist` invocation.
#[derive(Error, Debug)]
pub enum PublistCliError {
  /// Fetching, rendering or writing the list failed.
  #[error(transparent)]
  Publist(#[from] PublistError),

  /// The arguments contradict each other or the configuration.
  #[error("{0}")]
  Usage(String),
}
