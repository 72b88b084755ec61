//! Publication records.
//!
//! A [`Work`] is built from the payload of a single-work request. The work
//! itself sits in a `bulk[0].work` envelope. Only the title is required when
//! building; every other scalar is read with [`json::value_of`] and may be
//! empty. An empty or non-numeric year is rejected when the list is sorted.
//!
//! # Examples
//!
//! ```
//! use publist::{contributor::Duplicates, Dialect, Work};
//! use serde_json::json;
//!
//! let payload = json!({ "bulk": [{ "work": {
//!   "put-code": 1,
//!   "title": { "title": { "value": "A Paper" } },
//!   "publication-date": { "year": { "value": "2023" } },
//!   "journal-title": { "value": "Journal" },
//!   "url": { "value": "https://doi.org/10.1234/abcd" },
//!   "contributors": { "contributor": [] }
//! } }] });
//!
//! let work = Work::from_json(&payload, Duplicates::Merge)?;
//! assert_eq!(
//!   work.render(Dialect::Markdown),
//!   "*A Paper*, Journal, doi: [10.1234/abcd](https://doi.org/10.1234/abcd), 2023"
//! );
//! # Ok::<(), publist::error::PublistError>(())
//! ```

use super::*;

/// Location of the work record inside a single-work payload.
const WORK_ENVELOPE: &str = "bulk/0/work";

/// One publication on a profile.
#[derive(Debug, Clone)]
pub struct Work {
  /// Registry identifier of the work
  pub put_code:      String,
  /// The work's title
  pub title:         String,
  /// Publication year as text; empty when undated, must be an integer to sort
  pub year:          String,
  /// Journal or venue; empty when unknown
  pub journal_title: String,
  /// Optional citation entry in BibTeX form
  pub bibtex:        Option<String>,
  /// Link to the work; empty when unknown
  pub url:           String,
  /// Credited people, in record order
  pub contributors:  Vec<Contributor>,
}

impl Work {
  /// Builds a work from a single-work payload.
  ///
  /// # Errors
  ///
  /// - [`PublistError::MissingField`] if the envelope, the title or a
  ///   contributor's credit name is absent
  pub fn from_json(payload: &Value, duplicates: Duplicates) -> Result<Self> {
    let entry = json::path(payload, WORK_ENVELOPE)
      .ok_or_else(|| PublistError::MissingField(WORK_ENVELOPE.into()))?;

    let title = json::required_str(entry, "title/title/value")?;
    let contributors = match json::path(entry, "contributors/contributor") {
      Some(Value::Array(raw)) =>
        raw.iter().map(Contributor::from_json).collect::<Result<Vec<_>>>()?,
      _ => Vec::new(),
    };

    let work = Self {
      put_code: json::optional_str(entry, "put-code").unwrap_or_default(),
      title,
      year: json::optional_str(entry, "publication-date/year/value").unwrap_or_default(),
      journal_title: json::value_of(entry, "journal-title").to_string(),
      bibtex: json::optional_str(entry, "citation/citation-value"),
      url: json::value_of(entry, "url").to_string(),
      contributors: dedup_contributors(contributors, duplicates),
    };
    debug!(
      "Built work {} ({}) with {} contributors",
      work.put_code,
      work.year,
      work.contributors.len()
    );
    Ok(work)
  }

  /// The year as a number, for sorting.
  ///
  /// # Errors
  ///
  /// Returns [`PublistError::InvalidYear`] if the year is empty or not an
  /// integer.
  pub fn year_number(&self) -> Result<i64> {
    self.year.trim().parse().map_err(|_| PublistError::InvalidYear(self.year.clone()))
  }

  /// Contributors classified as authors.
  pub fn authors(&self) -> impl Iterator<Item = &Contributor> {
    self.contributors.iter().filter(|c| c.is_author())
  }

  /// Contributors whose role is exactly `editor`.
  pub fn editors(&self) -> impl Iterator<Item = &Contributor> {
    self.contributors.iter().filter(|c| c.is_editor())
  }

  /// The work's URL as display text for `dialect`.
  ///
  /// DOI URLs show the bare DOI after a `doi: ` prefix; other URLs show `Link`.
  /// The scheme is stripped from the display text but kept in the target.
  /// [`Dialect::Plain`] has no link markup and shows the full URL.
  pub fn formatted_url(&self, dialect: Dialect) -> String {
    if self.url.is_empty() {
      return String::new();
    }

    let (classifier, text) = if self.url.contains("doi") {
      let doi = match self.url.find("/10.") {
        Some(start) => &self.url[start + 1..],
        None => self.url.as_str(),
      };
      ("doi: ", doi)
    } else {
      ("", "Link")
    };
    let text = text.replace("https://", "").replace("http://", "");

    let link = match dialect {
      Dialect::Plain => self.url.clone(),
      _ => dialect.link(&text, &self.url),
    };
    format!("{classifier}{link}")
  }

  /// Renders the work as one reference line.
  ///
  /// Fields, in order: bold authors, italic title, journal, editors, URL, year.
  /// Authors are linked per `dialect`; editors are always plain printed names.
  /// Empty fields are dropped and the rest joined with `", "`.
  pub fn render(&self, dialect: Dialect) -> String {
    let authors = self
      .authors()
      .map(|author| format!("**{}**", author.render(dialect)))
      .collect::<Vec<_>>()
      .join("; ");
    let editors = self.editors().map(Contributor::print_name).collect::<Vec<_>>().join("; ");

    [
      authors,
      format!("*{}*", self.title),
      self.journal_title.clone(),
      editors,
      self.formatted_url(dialect),
      self.year.clone(),
    ]
    .into_iter()
    .filter(|field| !field.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
  }
}
