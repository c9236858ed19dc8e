//! Feed sources and loading.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing::{debug, warn};
use triage_models::Seed;
use url::Url;

use crate::decode::decode_seed;
use crate::error::{FeedError, Result};
use crate::mock::mock_reports;

/// Where reports come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedSource {
    /// Built-in sample reports.
    #[default]
    Mock,
    /// JSON file on disk.
    File(PathBuf),
    /// HTTP(S) endpoint returning JSON.
    Http(Url),
}

impl FeedSource {
    /// Short name for status lines.
    pub fn describe(&self) -> String {
        match self {
            FeedSource::Mock => "mock".to_string(),
            FeedSource::File(path) => path.display().to_string(),
            FeedSource::Http(url) => url.to_string(),
        }
    }

    /// Returns true for the built-in sample source.
    pub fn is_mock(&self) -> bool {
        matches!(self, FeedSource::Mock)
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl FromStr for FeedSource {
    type Err = FeedError;

    /// `mock`, an `http(s)://` URL, or anything else as a file path.
    ///
    /// A string with an `http(s)://` scheme must be a valid URL; it is never
    /// reinterpreted as a file path.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("mock") {
            return Ok(FeedSource::Mock);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            return Url::parse(s)
                .map(FeedSource::Http)
                .map_err(|source| FeedError::InvalidUrl {
                    input: s.to_string(),
                    source,
                });
        }
        Ok(FeedSource::File(PathBuf::from(s)))
    }
}

/// Loads a seed from `source`.
///
/// `timeout` bounds HTTP requests; it is ignored for other sources.
pub fn load(source: &FeedSource, timeout: Duration) -> Result<Seed> {
    let seed = match source {
        FeedSource::Mock => Seed::Flat(mock_reports()),
        FeedSource::File(path) => load_file(path)?,
        FeedSource::Http(url) => load_http(url, timeout)?,
    };
    debug!(source = %source, reports = seed.len(), partitioned = seed.is_partitioned(), "feed loaded");
    Ok(seed)
}

fn load_file(path: &Path) -> Result<Seed> {
    let body = fs::read_to_string(path).map_err(|source| FeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_seed(&body)
}

fn load_http(url: &Url, timeout: Duration) -> Result<Seed> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;

    let response = client
        .get(url.clone())
        .header("Accept", "application/json")
        .send()?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "feed endpoint returned an error");
        return Err(FeedError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    decode_seed(&body)
}
