//! Relevance/quality scoring for candidate resources.
//!
//! The score is a pure, additive heuristic used only for relative ordering.
//! It is never shown to users and has no bounds.

use learnscout_shared::{Resource, ResourceType};

/// Domains of platforms whose content is free to access.
const FREE_DOMAINS: &[&str] = &[
    "freecodecamp.org",
    "w3schools.com",
    "mozilla.org",
    "github.com",
    "stackoverflow.com",
    "dev.to",
    "youtube.com",
    "theodinproject.com",
    "khan",
    "mit.edu/ocw",
];

/// Platforms that usually sit behind a paywall.
const PAID_PLATFORMS: &[&str] = &[
    "coursera.org",
    "udemy.com",
    "pluralsight.com",
    "linkedin.com/learning",
];

/// Title keywords signalling free or open content.
const FREE_KEYWORDS: &[&str] = &["free", "open source", "open-source", "opensource"];

/// Title keywords signalling teaching-oriented content.
const QUALITY_KEYWORDS: &[&str] = &["tutorial", "guide", "learn", "beginner", "complete"];

const FREE_DOMAIN_WEIGHT: i32 = 15;
const PAID_PLATFORM_WEIGHT: i32 = -5;
const TOPIC_IN_TITLE_WEIGHT: i32 = 8;
const FREE_KEYWORD_WEIGHT: i32 = 10;
const QUALITY_KEYWORD_WEIGHT: i32 = 2;

/// Weight per resource type: free reference material ranks above courses,
/// which are often paid.
fn type_weight(resource_type: ResourceType) -> i32 {
    match resource_type {
        ResourceType::Documentation => 7,
        ResourceType::Article => 6,
        ResourceType::Video => 5,
        ResourceType::Course => 4,
        ResourceType::Other => 3,
    }
}

/// Compute the ranking score for a candidate resource against a topic.
///
/// Deterministic and side-effect-free; all matching is case-insensitive
/// substring matching.
pub fn score(resource: &Resource, topic: &str) -> i32 {
    let title = resource.title.to_lowercase();
    let url = resource.url.to_lowercase();
    let topic = topic.to_lowercase();

    let mut score = 0;

    for domain in FREE_DOMAINS {
        if url.contains(domain) {
            score += FREE_DOMAIN_WEIGHT;
        }
    }

    for platform in PAID_PLATFORMS {
        if url.contains(platform) {
            score += PAID_PLATFORM_WEIGHT;
        }
    }

    if !topic.is_empty() && title.contains(&topic) {
        score += TOPIC_IN_TITLE_WEIGHT;
    }

    for keyword in FREE_KEYWORDS {
        if title.contains(keyword) {
            score += FREE_KEYWORD_WEIGHT;
        }
    }

    score += type_weight(resource.resource_type);

    for keyword in QUALITY_KEYWORDS {
        if title.contains(keyword) {
            score += QUALITY_KEYWORD_WEIGHT;
        }
    }

    score
}
