//! Article platform adapters (Medium, Dev.to).
//!
//! Both platforms render their search results client-side, so scraping the
//! markup is a dead end. Instead each contributes a single deterministic
//! search link.

use learnscout_shared::{Resource, ResourceType};

use super::encode;

/// Medium search link for the topic.
pub fn medium(topic: &str) -> Vec<Resource> {
    vec![Resource::new(
        format!("{topic} Articles on Medium"),
        format!("https://medium.com/search?q={}", encode(topic)),
        format!("Curated articles and tutorials about {topic} from Medium writers"),
        ResourceType::Article,
    )]
}

/// Dev.to search link for the topic.
pub fn devto(topic: &str) -> Vec<Resource> {
    vec![Resource::new(
        format!("{topic} Tutorials on Dev.to"),
        format!("https://dev.to/search?q={}", encode(topic)),
        format!("Developer tutorials and articles about {topic} on the Dev.to community"),
        ResourceType::Article,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medium_builds_search_link() {
        let resources = medium("rust async");
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].url, "https://medium.com/search?q=rust+async");
        assert_eq!(resources[0].resource_type, ResourceType::Article);
        assert!(resources[0].is_complete());
    }

    #[test]
    fn devto_builds_search_link() {
        let resources = devto("rust");
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].url, "https://dev.to/search?q=rust");
        assert!(resources[0].title.contains("Dev.to"));
    }
}
