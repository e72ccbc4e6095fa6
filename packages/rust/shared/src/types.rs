//! Core domain types for LearnScout resource discovery.

use serde::{Deserialize, Serialize};

/// Maximum number of resources returned from a discovery run.
pub const MAX_RESULTS: usize = 15;

// ---------------------------------------------------------------------------
// ResourceType
// ---------------------------------------------------------------------------

/// Broad category of a learning resource.
///
/// Used for ranking weight and for the UI badge color; carries no other
/// behavioral meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Course,
    Documentation,
    Other,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Course => "course",
            Self::Documentation => "documentation",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

// ---------------------------------------------------------------------------
// Resource
// ---------------------------------------------------------------------------

/// A single discovered learning resource.
///
/// Created per-request by the discovery pipeline and discarded after the
/// response is sent; there is no persistence. The URL (case-insensitive)
/// is the natural deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Display title, always paired with a URL.
    pub title: String,
    /// Absolute link to the external resource.
    pub url: String,
    /// Optional human-readable summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Resource category.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

impl Resource {
    /// Create a resource with a description.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: Some(description.into()),
            resource_type,
        }
    }

    /// Whether this resource meets the retention invariant: both `title`
    /// and `url` must be non-empty.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.url.trim().is_empty()
    }

    /// The case-insensitive deduplication key for this resource.
    pub fn dedup_key(&self) -> String {
        self.url.to_lowercase()
    }
}
