//! # Topic Pools
//!
//! The four string pools cards are drawn from. Loaded once at startup from a
//! JSON topics document and read-only afterwards.
//!
//! ```text
//! topics.json / https://...  ──▶  PoolSource::fetch()  ──▶  Pools::from_json()
//!                                        │ error
//!                                        ▼
//!                                 Pools::fallback()
//! ```
//!
//! Missing fields, fields that are not arrays, and array entries that are not
//! strings are all read as "nothing there" rather than as errors.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, error, info};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pools {
    #[serde(default, deserialize_with = "lenient_strings")]
    pub would_you_rather_good: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub would_you_rather_bad: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub tell_a_story: Vec<String>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub hot_take_subjects: Vec<String>,
}

/// Accepts any JSON value; only arrays contribute, and only their string entries.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

const FALLBACK_WOULD_YOU_RATHER: [&str; 3] = ["dance without shoes", "only play vinyl", "never sleep"];
const FALLBACK_TELL_A_STORY: [&str; 1] = ["Tell about your first sunrise set."];
const FALLBACK_HOT_TAKE_SUBJECTS: [&str; 1] = ["vinyl-only nights"];

impl Pools {
    /// Parses a topics document.
    ///
    /// A top-level value that is not an object has none of the fields, so it
    /// yields empty pools. `null` is rejected like malformed JSON.
    pub fn from_json(body: &str) -> Result<Self, PoolError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| PoolError::Parse(e.to_string()))?;
        match value {
            serde_json::Value::Object(_) => {
                serde_json::from_value(value).map_err(|e| PoolError::Parse(e.to_string()))
            }
            serde_json::Value::Null => Err(PoolError::Parse("document is null".to_string())),
            other => {
                debug!("Topics document is not an object: {}", other);
                Ok(Self::default())
            }
        }
    }

    /// Minimal pools used when the topics document can't be loaded.
    ///
    /// The single would-you-rather list fills both the good and bad sides.
    pub fn fallback() -> Self {
        let wyr: Vec<String> = FALLBACK_WOULD_YOU_RATHER.iter().map(|s| s.to_string()).collect();
        Self {
            would_you_rather_good: wyr.clone(),
            would_you_rather_bad: wyr,
            tell_a_story: FALLBACK_TELL_A_STORY.iter().map(|s| s.to_string()).collect(),
            hot_take_subjects: FALLBACK_HOT_TAKE_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Total number of entries across all pools.
    pub fn len(&self) -> usize {
        self.would_you_rather_good.len()
            + self.would_you_rather_bad.len()
            + self.tell_a_story.len()
            + self.hot_take_subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum PoolError {
    /// Reading a local topics file failed.
    Io(std::io::Error),
    /// Request never got a response (DNS, refused, timeout).
    Network(String),
    /// Server answered with a non-success status.
    Http { status: u16 },
    /// Body was not valid JSON, or was `null`.
    Parse(String),
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Io(e) => write!(f, "topics I/O error: {e}"),
            PoolError::Network(msg) => write!(f, "topics network error: {msg}"),
            PoolError::Http { status } => write!(f, "topics request failed (HTTP {status})"),
            PoolError::Parse(msg) => write!(f, "topics parse error: {msg}"),
        }
    }
}

impl std::error::Error for PoolError {}

// ============================================================================
// Sources
// ============================================================================

/// Somewhere a topics document can be fetched from.
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Human-readable location for logs.
    fn describe(&self) -> String;

    /// Returns the raw document body.
    async fn fetch(&self) -> Result<String, PoolError>;
}

/// Topics document on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PoolSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, PoolError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(PoolError::Io)
    }
}

/// Topics document served over HTTP(S).
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PoolSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, PoolError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| PoolError::Network(e.to_string()))?;

        debug!("Topics response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PoolError::Http {
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| PoolError::Network(e.to_string()))
    }
}

/// Picks an `HttpSource` for `http://`/`https://` locations, a `FileSource` otherwise.
pub fn source_for(location: &str) -> Box<dyn PoolSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Result of the startup load.
#[derive(Debug, Clone)]
pub struct LoadedPools {
    pub pools: Pools,
    /// True when the fallback set replaced the requested document.
    pub used_fallback: bool,
}

/// Fetches and parses pools, substituting the fallback set on any failure.
///
/// Failures are logged, never returned.
pub async fn load_pools(source: &dyn PoolSource) -> LoadedPools {
    let location = source.describe();
    let result = match source.fetch().await {
        Ok(body) => Pools::from_json(&body),
        Err(e) => Err(e),
    };

    match result {
        Ok(pools) => {
            info!(
                "Loaded topics from {}: {} good, {} bad, {} stories, {} hot-take subjects",
                location,
                pools.would_you_rather_good.len(),
                pools.would_you_rather_bad.len(),
                pools.tell_a_story.len(),
                pools.hot_take_subjects.len()
            );
            LoadedPools {
                pools,
                used_fallback: false,
            }
        }
        Err(e) => {
            error!("Failed to load topics from {}: {}", location, e);
            LoadedPools {
                pools: Pools::fallback(),
                used_fallback: true,
            }
        }
    }
}
