//! People credited on a work.
//!
//! A [`Contributor`] is built from one entry of a work's
//! `contributors/contributor` array. Besides the raw fields it derives:
//!
//! - a short printed name (`"Smith, J."`) used for display and de-duplication
//! - an author/editor classification from the contributor role
//! - a link target, preferring the ORCID record over an email address
//!
//! # Examples
//!
//! ```
//! use publist::{Contributor, Dialect};
//! use serde_json::json;
//!
//! let raw = json!({
//!   "credit-name": { "value": "Ada Lovelace" },
//!   "contributor-orcid": { "uri": "https://orcid.org/0000-0000-0000-0001" },
//!   "contributor-attributes": { "contributor-role": "author" }
//! });
//! let ada = Contributor::from_json(&raw)?;
//! assert_eq!(ada.print_name(), "Lovelace, A.");
//! assert!(ada.is_author());
//! assert_eq!(
//!   ada.render(Dialect::Markdown),
//!   "[Lovelace, A.](https://orcid.org/0000-0000-0000-0001)"
//! );
//! # Ok::<(), publist::error::PublistError>(())
//! ```

use super::*;

/// A person associated with a work.
#[derive(Debug, Clone)]
pub struct Contributor {
  /// Name as credited on the work, e.g. `"Smith, John"` or `"John Smith"`
  pub credit_name: String,
  /// Optional contact email
  pub email:       Option<String>,
  /// Optional ORCID record URI
  pub orcid_uri:   Option<String>,
  /// Contributor role; empty when the record has no attributes
  pub role:        String,
}

/// What to do with contributors that print to the same name.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Duplicates {
  /// Keep only the first contributor for each printed name.
  #[default]
  Merge,
  /// Keep every contributor record.
  Keep,
}

impl Contributor {
  /// Builds a contributor from a raw registry record.
  ///
  /// # Errors
  ///
  /// Returns [`PublistError::MissingField`] if `credit-name/value` is absent or
  /// blank.
  /// Email, ORCID URI and role are optional.
  pub fn from_json(raw: &Value) -> Result<Self> {
    let credit_name = json::required_str(raw, "credit-name/value")?;
    if credit_name.trim().is_empty() {
      return Err(PublistError::MissingField("credit-name/value".into()));
    }
    let email = Some(json::value_of(raw, "contributor-email")).filter(|e| !e.is_empty());
    let orcid_uri = json::optional_str(raw, "contributor-orcid/uri").filter(|u| !u.is_empty());
    let role =
      json::optional_str(raw, "contributor-attributes/contributor-role").unwrap_or_default();

    Ok(Self { credit_name, email: email.map(String::from), orcid_uri, role })
  }

  /// Splits the credit name into `(first_name, last_name)`.
  ///
  /// `"Last, First"` splits at the first `", "`. Otherwise the last
  /// space-separated token is the last name and everything before it the first
  /// name. Multi-word surnames and particles are not recognized.
  fn split_name(&self) -> (&str, &str) {
    if let Some((last, first)) = self.credit_name.split_once(", ") {
      return (first, last);
    }
    match self.credit_name.trim_end().rsplit_once(' ') {
      Some((first, last)) => (first.trim(), last),
      None => ("", self.credit_name.trim()),
    }
  }

  /// Given name(s) part of the credit name.
  pub fn first_name(&self) -> &str { self.split_name().0 }

  /// Family name part of the credit name.
  pub fn last_name(&self) -> &str { self.split_name().1 }

  /// Short display name, `"{last_name}, {first initial}."`.
  ///
  /// A credit name without a first name prints as the bare last name.
  pub fn print_name(&self) -> String {
    match self.first_name().chars().next() {
      Some(initial) => format!("{}, {initial}.", self.last_name()),
      None => self.last_name().to_string(),
    }
  }

  /// Whether two records denote the same person, judged by printed name.
  pub fn same_person(&self, other: &Contributor) -> bool {
    self.print_name() == other.print_name()
  }

  /// `author`, or any CRediT role mentioning writing or investigation.
  pub fn is_author(&self) -> bool {
    self.role == "author" || self.role.contains("writing") || self.role.contains("investigation")
  }

  /// Only the exact `editor` role.
  pub fn is_editor(&self) -> bool { self.role == "editor" }

  /// The ORCID URI if known, else a `mailto:` link, else `""`.
  pub fn link_address(&self) -> String {
    match (&self.orcid_uri, &self.email) {
      (Some(uri), _) => uri.clone(),
      (None, Some(email)) => format!("mailto:{email}"),
      (None, None) => String::new(),
    }
  }

  /// Printed name wrapped as a link in `dialect`, or bare when there is no link.
  pub fn render(&self, dialect: Dialect) -> String {
    let link = self.link_address();
    if link.is_empty() {
      self.print_name()
    } else {
      dialect.link(&self.print_name(), &link)
    }
  }
}

/// Applies the duplicate `policy` to `contributors`, keeping first occurrences.
pub fn dedup_contributors(contributors: Vec<Contributor>, policy: Duplicates) -> Vec<Contributor> {
  if policy == Duplicates::Keep {
    return contributors;
  }
  let mut unique: Vec<Contributor> = Vec::with_capacity(contributors.len());
  for contributor in contributors {
    if unique.iter().any(|seen| seen.same_person(&contributor)) {
      trace!("Dropping duplicate contributor {}", contributor.credit_name);
      continue;
    }
    unique.push(contributor);
  }
  unique
}
