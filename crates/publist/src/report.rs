//! Ordering, grouping and writing the publication list.
//!
//! Works are listed newest first under one heading per year. Each heading and
//! each work line is followed by a blank line:
//!
//! ```text
//! # 2023
//!
//! **Smith, J.**, *A Paper*, Journal, 2023
//!
//! # 2021
//!
//! *Another Paper*, 2021
//!
//! ```

use super::*;

/// Name of the file written into the output directory.
pub const OUTPUT_FILE: &str = "publications.txt";

/// Sorts works by year, newest first.
///
/// The sort is stable: works of the same year keep their fetch order.
///
/// # Errors
///
/// Returns [`PublistError::InvalidYear`] if any year is missing or not an
/// integer; the list is not partially sorted in that case.
pub fn sort_works(works: Vec<Work>) -> Result<Vec<Work>> {
  let mut keyed =
    works.into_iter().map(|work| Ok((work.year_number()?, work))).collect::<Result<Vec<_>>>()?;
  keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
  Ok(keyed.into_iter().map(|(_, work)| work).collect())
}

/// Sorts `works` and renders them as report lines in `dialect`.
///
/// Empty strings in the result are blank separator lines.
pub fn build_lines(works: Vec<Work>, dialect: Dialect) -> Result<Vec<String>> {
  let works = sort_works(works)?;

  let mut year = String::new();
  let mut lines = Vec::new();
  for work in &works {
    if work.year != year {
      lines.extend(dialect.heading(&work.year));
      lines.push(String::new());
      year.clone_from(&work.year);
    }
    lines.push(work.render(dialect));
    lines.push(String::new());
  }
  Ok(lines)
}

/// Writes `lines` to [`OUTPUT_FILE`] inside `dir`, replacing any existing file.
///
/// Every line is terminated with `\n`.
///
/// # Errors
///
/// Returns [`PublistError::Path`] if `dir` is not a directory or the file
/// cannot be written.
pub fn write_report(dir: impl AsRef<Path>, lines: &[String]) -> Result<PathBuf> {
  let dir = dir.as_ref();
  if !dir.is_dir() {
    return Err(PublistError::Path(std::io::Error::new(
      std::io::ErrorKind::NotFound,
      format!("Output directory {} not found", dir.display()),
    )));
  }

  let path = dir.join(OUTPUT_FILE);
  let contents: String = lines.iter().map(|line| format!("{line}\n")).collect();
  debug!("Writing {} lines to {}", lines.len(), path.display());
  std::fs::write(&path, contents)?;
  Ok(path)
}
