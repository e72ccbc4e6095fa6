//! Fallback link generator.
//!
//! When no source adapter succeeds, the pipeline still has to return a
//! usable list. These links are built purely from the topic string and
//! perform no I/O, so this path can never fail.

use learnscout_shared::{Resource, ResourceType};

use crate::adapters::encode;

/// Number of entries in the fallback list.
pub const FALLBACK_COUNT: usize = 5;

/// Build the fixed list of generic search entry points for a topic.
pub fn fallback_resources(topic: &str) -> Vec<Resource> {
    let main_keyword = topic
        .to_lowercase()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    vec![
        Resource::new(
            format!("{topic} - Complete Learning Path"),
            format!(
                "https://www.google.com/search?q={}",
                encode(&format!("{topic} tutorial complete guide learn"))
            ),
            format!("Comprehensive search results for learning {topic} from beginner to advanced level"),
            ResourceType::Other,
        ),
        Resource::new(
            format!("{topic} GitHub Repositories"),
            format!(
                "https://github.com/search?q={}",
                encode(&format!("awesome {topic} tutorial"))
            ),
            format!("Open source projects, examples, and learning resources for {topic}"),
            ResourceType::Other,
        ),
        Resource::new(
            format!("{topic} Stack Overflow"),
            format!(
                "https://stackoverflow.com/questions/tagged/{}",
                encode(&main_keyword)
            ),
            format!("Community discussions, questions, and expert answers about {topic}"),
            ResourceType::Article,
        ),
        Resource::new(
            format!("Learn {topic} - Free Resources"),
            format!(
                "https://www.freecodecamp.org/news/search/?query={}",
                encode(topic)
            ),
            format!("Free tutorials, projects, and interactive lessons for {topic}"),
            ResourceType::Course,
        ),
        Resource::new(
            format!("{topic} Documentation Hub"),
            format!("https://devdocs.io/{}", encode(&main_keyword)),
            format!("Official documentation and API references for {topic}"),
            ResourceType::Documentation,
        ),
    ]
}
