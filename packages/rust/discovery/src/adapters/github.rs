//! GitHub repository search adapter.
//!
//! Scrapes the public repository search page for a couple of topic-derived
//! queries (awesome lists first, tutorials second) and keeps the top few
//! entries per query.

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use learnscout_shared::{Resource, ResourceType, Result};

use super::{encode, fetch_html};

/// Query templates tried against the search page; `{topic}` is substituted.
const QUERY_TEMPLATES: &[&str] = &[
    "awesome {topic}",
    "{topic} tutorial",
    "learn {topic}",
    "{topic} examples",
    "{topic} guide",
];

/// How many of the templates to actually query. Kept low to stay under
/// the search page's rate limits.
const QUERIES_PER_SEARCH: usize = 2;

/// Search GitHub repositories for the topic.
///
/// Individual query failures are logged and skipped; the adapter only fails
/// when every query fails.
pub async fn fetch(
    client: &Client,
    base: &Url,
    topic: &str,
    per_query: usize,
) -> Result<Vec<Resource>> {
    let mut resources = Vec::new();
    let mut last_error = None;

    for template in QUERY_TEMPLATES.iter().take(QUERIES_PER_SEARCH) {
        let query = template.replace("{topic}", topic);
        let search_url = format!(
            "{}/search?q={}&type=repositories&sort=stars",
            base.as_str().trim_end_matches('/'),
            encode(&query)
        );

        match fetch_html(client, &search_url).await {
            Ok(body) => resources.extend(parse_results(&body, base, topic, per_query)),
            Err(e) => {
                debug!(query = %query, error = %e, "github search query failed");
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) if resources.is_empty() => Err(e),
        _ => Ok(resources),
    }
}

/// Parse up to `limit` repository rows out of a search results page.
fn parse_results(html: &str, base: &Url, topic: &str, limit: usize) -> Vec<Resource> {
    let doc = Html::parse_document(html);
    let row_sel = Selector::parse("article.Box-row").unwrap();
    let title_sel = Selector::parse("h3 a").unwrap();
    let desc_sel = Selector::parse("p").unwrap();

    let mut resources = Vec::new();

    for row in doc.select(&row_sel).take(limit) {
        let Some(link) = row.select(&title_sel).next() else {
            continue;
        };
        let title = link.text().collect::<String>().trim().to_string();
        let Some(href) = link.value().attr("href") else {
            continue;
        };

        let Ok(full_url) = base.join(href) else {
            continue;
        };

        if title.is_empty() {
            continue;
        }

        let description = row
            .select(&desc_sel)
            .next()
            .map(|p| p.text().collect::<String>().trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("GitHub repository for {topic}"));

        resources.push(Resource::new(
            format!("{title} (GitHub)"),
            full_url.to_string(),
            description,
            ResourceType::Other,
        ));
    }

    resources
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"<html><body>
        <article class="Box-row">
            <h3><a href="/rust-unofficial/awesome-rust">rust-unofficial/awesome-rust</a></h3>
            <p>A curated list of Rust code and resources.</p>
        </article>
        <article class="Box-row">
            <h3><a href="https://github.com/ctjhoa/rust-learning">ctjhoa/rust-learning</a></h3>
            <p></p>
        </article>
        <article class="Box-row">
            <h3><a href="/example/third">example/third</a></h3>
        </article>
        <article class="Box-row">
            <h3><a href="/example/fourth">example/fourth</a></h3>
        </article>
    </body></html>"#;

    fn github_base() -> Url {
        Url::parse("https://github.com").unwrap()
    }

    #[test]
    fn parses_limited_rows() {
        let resources = parse_results(SEARCH_PAGE, &github_base(), "rust", 3);
        assert_eq!(resources.len(), 3);
        assert_eq!(resources[0].title, "rust-unofficial/awesome-rust (GitHub)");
        assert_eq!(
            resources[0].url,
            "https://github.com/rust-unofficial/awesome-rust"
        );
        assert_eq!(
            resources[0].description.as_deref(),
            Some("A curated list of Rust code and resources.")
        );
    }

    #[test]
    fn resolves_relative_hrefs_and_fills_description() {
        let resources = parse_results(SEARCH_PAGE, &github_base(), "rust", 2);
        // Absolute hrefs pass through unchanged
        assert_eq!(resources[1].url, "https://github.com/ctjhoa/rust-learning");
        // Empty description falls back to a topic-derived one
        assert_eq!(
            resources[1].description.as_deref(),
            Some("GitHub repository for rust")
        );
        assert!(
            resources
                .iter()
                .all(|r| r.resource_type == ResourceType::Other)
        );
    }

    #[test]
    fn empty_page_yields_no_resources() {
        let resources = parse_results("<html><body></body></html>", &github_base(), "rust", 3);
        assert!(resources.is_empty());
    }

    #[tokio::test]
    async fn fetch_fails_when_all_queries_fail() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = Client::new();
        let base = Url::parse(&server.uri()).unwrap();
        let result = fetch(&client, &base, "rust", 3).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn fetch_tolerates_partial_query_failure() {
        let server = wiremock::MockServer::start().await;

        // First query template ("awesome {topic}") succeeds, second 500s.
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::query_param(
                "q",
                "awesome rust",
            ))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(SEARCH_PAGE))
            .mount(&server)
            .await;

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = Client::new();
        let base = Url::parse(&server.uri()).unwrap();
        let resources = fetch(&client, &base, "rust", 3).await.unwrap();
        assert_eq!(resources.len(), 3);
    }
}
