//! Output markup dialects.

use super::*;

/// Suffix closing a reStructuredText inline hyperlink.
pub const RST_LINK_SUFFIX: &str = "_";

/// Markup used for headings and links in the rendered list.
///
/// Selectors other than `"md"` and `"rst"` are not rejected; they select
/// [`Dialect::Plain`], which emits no link or heading markup.
///
/// ```
/// use publist::Dialect;
///
/// assert_eq!(Dialect::from_selector("md"), Dialect::Markdown);
/// assert_eq!(Dialect::from_selector("rst"), Dialect::ReStructuredText);
/// assert_eq!(Dialect::from_selector("html"), Dialect::Plain);
/// ```
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Deserialize)]
#[serde(from = "String")]
pub enum Dialect {
  /// `"md"`
  #[default]
  Markdown,
  /// `"rst"`
  ReStructuredText,
  /// Any other selector.
  Plain,
}

impl Dialect {
  /// Maps a format selector onto a dialect. Never fails.
  pub fn from_selector(selector: &str) -> Self {
    match selector {
      "md" => Dialect::Markdown,
      "rst" => Dialect::ReStructuredText,
      _ => Dialect::Plain,
    }
  }

  /// Wraps `text` as a hyperlink to `target`.
  ///
  /// [`Dialect::Plain`] has no link syntax and returns `text` unchanged.
  pub fn link(&self, text: &str, target: &str) -> String {
    match self {
      Dialect::Markdown => format!("[{text}]({target})"),
      Dialect::ReStructuredText => format!("`{text} <{target}>`{RST_LINK_SUFFIX}"),
      Dialect::Plain => text.to_string(),
    }
  }

  /// Lines introducing a year section, not including the blank separator.
  pub fn heading(&self, title: &str) -> Vec<String> {
    match self {
      Dialect::Markdown => vec![format!("# {title}")],
      Dialect::ReStructuredText => vec![title.to_string(), "=".repeat(title.chars().count())],
      Dialect::Plain => vec![title.to_string()],
    }
  }
}

impl Display for Dialect {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Dialect::Markdown => write!(f, "md"),
      Dialect::ReStructuredText => write!(f, "rst"),
      Dialect::Plain => write!(f, "plain"),
    }
  }
}

impl From<String> for Dialect {
  fn from(selector: String) -> Self { Self::from_selector(&selector) }
}

impl FromStr for Dialect {
  type Err = PublistError;

  fn from_str(s: &str) -> Result<Self> { Ok(Self::from_selector(s)) }
}
