//! Course catalog adapter: search links into the major course platforms.

use learnscout_shared::{Resource, ResourceType};

use super::encode;

/// Course platform search links for the topic.
pub fn platforms(topic: &str) -> Vec<Resource> {
    let encoded = encode(topic);

    let catalogs = [
        (
            "freeCodeCamp",
            format!("https://www.freecodecamp.org/news/search/?query={encoded}"),
            format!("Free {topic} tutorials and projects"),
        ),
        (
            "Khan Academy",
            format!(
                "https://www.khanacademy.org/search?search_again=1&page_search_query={encoded}"
            ),
            format!("{topic} lessons and exercises"),
        ),
        (
            "Coursera",
            format!("https://www.coursera.org/search?query={encoded}"),
            format!("{topic} courses from universities"),
        ),
        (
            "edX",
            format!("https://www.edx.org/search?q={encoded}"),
            format!("{topic} courses from top institutions"),
        ),
    ];

    catalogs
        .into_iter()
        .map(|(name, url, description)| {
            Resource::new(
                format!("Learn {topic} on {name}"),
                url,
                description,
                ResourceType::Course,
            )
        })
        .collect()
}
