//! Client for the ORCID public registry.
//!
//! The registry exposes two read-only endpoints per profile:
//!
//! - `GET {base}/{orcid}/works/`: overview grouping every work on the profile
//! - `GET {base}/{orcid}/works/{put-code}`: full record of one work
//!
//! Both are requested with `Accept: application/json`. The registry turns away
//! clients that do not look like a browser, so a browser user agent is sent
//! unless configured otherwise.
//!
//! # Examples
//!
//! ```no_run
//! use publist::{config::RegistryConfig, contributor::Duplicates, registry::Registry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::new(&RegistryConfig::default())?;
//! let works = registry.fetch_works("0000-0002-1825-0097", Duplicates::Merge).await?;
//! for work in &works {
//!   println!("{} ({})", work.title, work.year);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use futures::{stream, StreamExt, TryStreamExt};
use reqwest::header::{self, HeaderMap, HeaderValue};

use super::*;

/// Public API address of the registry.
pub const ORCID_API: &str = "https://pub.orcid.org/v3.0/";

/// User agent sent with every request unless overridden.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (X11; CrOS x86_64 12871.102.0) \
                                      AppleWebKit/537.36 (KHTML, like Gecko) \
                                      Chrome/81.0.4044.141 Safari/537.36";

/// Handle for one work listed in the overview payload.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WorkSummary {
  /// Registry identifier used to fetch the full work
  pub put_code: String,
}

/// HTTP session against the registry, scoped to a single run.
#[derive(Debug, Clone)]
pub struct Registry {
  /// Shared connection pool for every request of the run
  client:      reqwest::Client,
  /// API root, without trailing slash
  base_url:    String,
  /// Log every request and response at `info`/`debug` instead of `debug`/`trace`
  log_http:    bool,
  /// Maximum number of work requests in flight
  concurrency: usize,
}

impl Registry {
  /// Builds the HTTP client described by `config`.
  ///
  /// # Errors
  ///
  /// - [`PublistError::Config`] if the user agent is not a valid header value
  /// - [`PublistError::Network`] if the TLS backend cannot be initialized
  pub fn new(config: &RegistryConfig) -> Result<Self> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    let user_agent = HeaderValue::from_str(&config.user_agent)
      .map_err(|e| PublistError::Config(format!("Invalid user agent: {e}")))?;

    let mut builder = reqwest::Client::builder().default_headers(headers).user_agent(user_agent);
    if let Some(secs) = config.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(Self {
      client:      builder.build()?,
      base_url:    config.base_url.trim_end_matches('/').to_string(),
      log_http:    config.log_http,
      concurrency: config.concurrency.max(1),
    })
  }

  /// URL of the works overview, or of a single work when `put_code` is set.
  fn endpoint(&self, orcid: &str, put_code: Option<&str>) -> String {
    format!("{}/{orcid}/works/{}", self.base_url, put_code.unwrap_or(""))
  }

  /// Issues a GET and parses the body as JSON.
  async fn get_json(&self, url: &str) -> Result<Value> {
    if self.log_http {
      info!("GET {url}");
    } else {
      debug!("GET {url}");
    }

    let response = self.client.get(url).send().await?;
    let status = response.status();
    if self.log_http {
      info!("{url} answered {status}");
    }
    if status != StatusCode::OK {
      warn!("Registry answered {status} for {url}");
      return Err(PublistError::Registry(status));
    }

    let data = response.bytes().await?;
    if self.log_http {
      debug!("{url} response: {}", String::from_utf8_lossy(&data));
    } else {
      trace!("{url} response: {}", String::from_utf8_lossy(&data));
    }
    Ok(serde_json::from_slice(&data)?)
  }

  /// Fetches the works overview of a profile.
  ///
  /// # Errors
  ///
  /// - [`PublistError::InvalidIdentifier`] if `orcid` is malformed
  /// - [`PublistError::Registry`] on any status other than `200 OK`
  /// - [`PublistError::Parse`] if the body is not JSON
  pub async fn fetch_overview(&self, orcid: &str) -> Result<Value> {
    validate_orcid(orcid)?;
    self.get_json(&self.endpoint(orcid, None)).await
  }

  /// Fetches the full record of one work.
  ///
  /// Errors as for [`Registry::fetch_overview`], plus
  /// [`PublistError::InvalidPutCode`] if `put_code` is not a plain number.
  pub async fn fetch_work(&self, orcid: &str, put_code: &str) -> Result<Value> {
    validate_orcid(orcid)?;
    validate_put_code(put_code)?;
    self.get_json(&self.endpoint(orcid, Some(put_code))).await
  }

  /// Fetches and builds every work on a profile, in overview order.
  ///
  /// With a concurrency above one several work requests are in flight at
  /// once; results are still yielded in overview order. The first failure
  /// aborts the whole fetch.
  pub async fn fetch_works(&self, orcid: &str, duplicates: Duplicates) -> Result<Vec<Work>> {
    let overview = self.fetch_overview(orcid).await?;
    let summaries = collect_put_codes(&overview)?;
    info!("Found {} works for {orcid}", summaries.len());

    stream::iter(summaries)
      .map(move |summary| async move {
        let payload = self.fetch_work(orcid, &summary.put_code).await?;
        Work::from_json(&payload, duplicates)
      })
      .buffered(self.concurrency)
      .try_collect()
      .await
  }
}

/// Put-codes of the first summary in every overview group, in payload order.
///
/// # Errors
///
/// - [`PublistError::MissingField`] if the `group` array is absent or a group
///   has no work summary with a put-code
/// - [`PublistError::InvalidPutCode`] if a put-code is not all ASCII digits
pub fn collect_put_codes(overview: &Value) -> Result<Vec<WorkSummary>> {
  let Some(Value::Array(groups)) = overview.get("group") else {
    return Err(PublistError::MissingField("group".into()));
  };

  groups
    .iter()
    .enumerate()
    .map(|(index, group)| -> Result<WorkSummary> {
      let put_code = json::optional_str(group, "work-summary/0/put-code").ok_or_else(|| {
        PublistError::MissingField(format!("group/{index}/work-summary/0/put-code"))
      })?;
      validate_put_code(&put_code)?;
      Ok(WorkSummary { put_code })
    })
    .collect()
}

/// Checks that a put-code is a non-empty run of ASCII digits.
pub fn validate_put_code(put_code: &str) -> Result<()> {
  if !put_code.is_empty() && put_code.bytes().all(|b| b.is_ascii_digit()) {
    Ok(())
  } else {
    Err(PublistError::InvalidPutCode(put_code.into()))
  }
}

/// Checks that `orcid` looks like an ORCID iD (`NNNN-NNNN-NNNN-NNNX`).
pub fn validate_orcid(orcid: &str) -> Result<()> {
  lazy_static! {
    static ref ORCID: Regex = Regex::new(r"^[0-9A-Za-z]{4}(-[0-9A-Za-z]{4}){3}$").unwrap();
  }

  if ORCID.is_match(orcid) {
    Ok(())
  } else {
    Err(PublistError::InvalidIdentifier(orcid.to_string()))
  }
}
