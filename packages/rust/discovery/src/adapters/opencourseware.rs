//! Open courseware adapter: university catalogs with free course material.

use learnscout_shared::{Resource, ResourceType};

use super::encode;

/// Open courseware search links for the topic.
pub fn catalogs(topic: &str) -> Vec<Resource> {
    let encoded = encode(topic);

    let sources = [
        (
            "MIT OpenCourseWare",
            format!("https://ocw.mit.edu/search/?q={encoded}"),
            format!("Free {topic} courses from MIT"),
        ),
        (
            "Stanford Online",
            format!("https://online.stanford.edu/search-catalog?keywords={encoded}"),
            format!("{topic} courses from Stanford University"),
        ),
        (
            "Harvard Online Learning",
            format!("https://pll.harvard.edu/catalog?keywords={encoded}"),
            format!("{topic} courses from Harvard University"),
        ),
    ];

    sources
        .into_iter()
        .map(|(name, url, description)| {
            Resource::new(
                format!("{topic} on {name}"),
                url,
                description,
                ResourceType::Course,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_link_per_catalog() {
        let resources = catalogs("linear algebra");
        assert_eq!(resources.len(), 3);
        assert!(resources.iter().all(|r| r.is_complete()));
        assert!(
            resources
                .iter()
                .all(|r| r.url.contains("linear+algebra"))
        );
    }
}
