//! Stack Overflow search adapter.

use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use learnscout_shared::{Resource, ResourceType, Result};

use super::{encode, fetch_html};

/// Search Stack Overflow for discussions about the topic, keeping the top
/// `limit` question summaries.
pub async fn fetch(
    client: &Client,
    base: &Url,
    topic: &str,
    limit: usize,
) -> Result<Vec<Resource>> {
    let search_url = format!(
        "{}/search?q={}",
        base.as_str().trim_end_matches('/'),
        encode(topic)
    );

    let body = fetch_html(client, &search_url).await?;
    Ok(parse_results(&body, base, topic, limit))
}

/// Parse up to `limit` question summaries out of a search results page.
fn parse_results(html: &str, base: &Url, topic: &str, limit: usize) -> Vec<Resource> {
    let doc = Html::parse_document(html);
    let summary_sel = Selector::parse(".s-post-summary").unwrap();
    let title_sel = Selector::parse(".s-post-summary--content-title a").unwrap();
    let excerpt_sel = Selector::parse(".s-post-summary--content-excerpt").unwrap();

    let mut resources = Vec::new();

    for summary in doc.select(&summary_sel).take(limit) {
        let Some(link) = summary.select(&title_sel).next() else {
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

        let excerpt = summary
            .select(&excerpt_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| format!("Stack Overflow discussion about {topic}"));

        resources.push(Resource::new(
            format!("{title} (Stack Overflow)"),
            full_url.to_string(),
            excerpt,
            ResourceType::Article,
        ));
    }

    resources
}
