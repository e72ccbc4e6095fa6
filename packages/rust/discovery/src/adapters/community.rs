//! Community forum adapter (Reddit).

use learnscout_shared::{Resource, ResourceType};

use super::encode;

/// Reddit search link for community discussions about the topic.
pub fn reddit(topic: &str) -> Vec<Resource> {
    vec![Resource::new(
        format!("{topic} Community Discussions"),
        format!("https://www.reddit.com/search/?q={}", encode(topic)),
        format!("Community discussions, tips, and resources about {topic} on Reddit"),
        ResourceType::Other,
    )]
}
