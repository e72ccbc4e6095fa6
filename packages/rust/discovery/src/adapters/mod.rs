//! Source adapters contributing candidate resources from external platforms.
//!
//! Each adapter takes a topic and returns `Result<Vec<Resource>>`. Network
//! adapters (GitHub, Stack Overflow, documentation probes) fetch and parse
//! live search pages under a bounded timeout; the rest construct
//! deterministic search links with no I/O. A failing adapter contributes
//! nothing and never aborts its siblings.

pub mod articles;
pub mod community;
pub mod courses;
pub mod docs;
pub mod github;
pub mod opencourseware;
pub mod stackoverflow;

use reqwest::Client;
use url::Url;

use learnscout_shared::{LearnScoutError, Result};

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

/// Base URLs the network adapters talk to.
///
/// Defaults point at the real sites; tests substitute a mock server.
/// `doc_probes` entries are URL templates where `{topic}` is replaced with
/// the normalized topic slug.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Origin for GitHub repository search.
    pub github: Url,
    /// Origin for Stack Overflow search.
    pub stackoverflow: Url,
    /// Candidate documentation URLs probed with HEAD requests.
    pub doc_probes: Vec<String>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github: Url::parse("https://github.com").expect("static URL"),
            stackoverflow: Url::parse("https://stackoverflow.com").expect("static URL"),
            doc_probes: vec![
                "https://docs.{topic}.org".into(),
                "https://{topic}.readthedocs.io".into(),
                "https://developer.mozilla.org/en-US/docs/Web/{topic}".into(),
                "https://www.w3schools.com/{topic}".into(),
                "https://devdocs.io/{topic}".into(),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Percent-encode a free-text value for use in a query string.
pub fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Normalize a topic into a lowercase slug with whitespace removed
/// (e.g. `"Machine Learning"` → `"machinelearning"`).
pub fn normalize_topic(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Fetch a URL and return the response body, treating non-2xx as an error.
pub(crate) async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LearnScoutError::Network(format!("{url}: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LearnScoutError::Network(format!("{url}: HTTP {status}")));
    }

    response
        .text()
        .await
        .map_err(|e| LearnScoutError::Network(format!("{url}: body read failed: {e}")))
}
