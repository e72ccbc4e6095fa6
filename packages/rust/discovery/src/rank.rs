//! Candidate filtering, ordering, and novelty checks.

use std::collections::HashSet;

use learnscout_shared::Resource;

use crate::score::score;

/// Filter out incomplete candidates, sort the rest by descending score,
/// and truncate to `max_results`.
pub fn rank(mut candidates: Vec<Resource>, topic: &str, max_results: usize) -> Vec<Resource> {
    candidates.retain(Resource::is_complete);
    candidates.sort_by(|a, b| score(b, topic).cmp(&score(a, topic)));
    candidates.truncate(max_results);
    candidates
}

/// Keep only candidates whose URL has not been seen before.
///
/// Used by "load more" requests: `seen` holds the URLs already delivered to
/// the caller, compared case-insensitively against each candidate.
pub fn filter_novel(candidates: Vec<Resource>, seen: &HashSet<String>) -> Vec<Resource> {
    let seen: HashSet<String> = seen.iter().map(|url| url.to_lowercase()).collect();

    candidates
        .into_iter()
        .filter(|candidate| !seen.contains(&candidate.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnscout_shared::ResourceType;

    fn resource(title: &str, url: &str, resource_type: ResourceType) -> Resource {
        Resource::new(title, url, "test", resource_type)
    }

    #[test]
    fn rank_drops_incomplete_candidates() {
        let candidates = vec![
            resource("", "https://example.com/a", ResourceType::Other),
            resource("Valid", "https://example.com/b", ResourceType::Other),
            resource("No URL", "", ResourceType::Other),
        ];

        let ranked = rank(candidates, "x", 15);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "Valid");
    }

    #[test]
    fn rank_orders_by_descending_score() {
        let candidates = vec![
            resource("Plain", "https://example.com/a", ResourceType::Other),
            resource("Docs", "https://example.com/b", ResourceType::Documentation),
            resource("On GitHub", "https://github.com/x/y", ResourceType::Other),
        ];

        let ranked = rank(candidates, "x", 15);
        for pair in ranked.windows(2) {
            assert!(score(&pair[0], "x") >= score(&pair[1], "x"));
        }
        assert_eq!(ranked[0].title, "On GitHub");
    }

    #[test]
    fn rank_truncates_to_max_results() {
        let candidates: Vec<Resource> = (0..30)
            .map(|i| {
                resource(
                    &format!("Resource {i}"),
                    &format!("https://example.com/{i}"),
                    ResourceType::Other,
                )
            })
            .collect();

        let ranked = rank(candidates, "x", 15);
        assert_eq!(ranked.len(), 15);
    }

    #[test]
    fn documentation_outranks_course_end_to_end() {
        // One candidate per type, no keyword or domain matches, so only the
        // type weight differentiates them.
        let candidates = vec![
            resource("C", "https://example.com/course", ResourceType::Course),
            resource("D", "https://example.com/docs", ResourceType::Documentation),
            resource("V", "https://example.com/video", ResourceType::Video),
            resource("A", "https://example.com/article", ResourceType::Article),
            resource("O", "https://example.com/other", ResourceType::Other),
        ];

        let ranked = rank(candidates, "React", 15);
        let types: Vec<ResourceType> = ranked.iter().map(|r| r.resource_type).collect();
        assert_eq!(
            types,
            vec![
                ResourceType::Documentation,
                ResourceType::Article,
                ResourceType::Video,
                ResourceType::Course,
                ResourceType::Other,
            ]
        );
    }

    #[test]
    fn novelty_filter_is_case_insensitive() {
        let seen: HashSet<String> = ["https://example.com/a".to_string()].into_iter().collect();

        let candidates = vec![
            resource("Dup", "https://EXAMPLE.com/A", ResourceType::Other),
            resource("New", "https://example.com/b", ResourceType::Other),
        ];

        let novel = filter_novel(candidates, &seen);
        assert_eq!(novel.len(), 1);
        assert_eq!(novel[0].url, "https://example.com/b");
    }

    #[test]
    fn novelty_filter_with_empty_seen_keeps_everything() {
        let candidates = vec![resource("A", "https://example.com/a", ResourceType::Other)];
        let novel = filter_novel(candidates, &HashSet::new());
        assert_eq!(novel.len(), 1);
    }
}
