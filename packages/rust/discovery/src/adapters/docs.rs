//! Official documentation probe adapter.
//!
//! Sends HEAD requests to a fixed list of candidate documentation URLs
//! derived from the topic. The first URL answering 200 wins; at most one
//! resource is contributed.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use learnscout_shared::{LearnScoutError, Resource, ResourceType, Result};

use super::normalize_topic;

/// Probe candidate documentation URLs for the topic.
///
/// A URL that responds with a non-200 status is simply not a documentation
/// site for this topic; only when every probe errors out (connection
/// failure, timeout) does the adapter itself fail.
pub async fn fetch(
    client: &Client,
    probes: &[String],
    topic: &str,
    timeout_secs: u64,
) -> Result<Vec<Resource>> {
    let slug = normalize_topic(topic);
    let mut errors = 0usize;

    for template in probes {
        let url = template.replace("{topic}", &slug);

        match client
            .head(&url)
            .timeout(Duration::from_secs(timeout_secs))
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                return Ok(vec![Resource::new(
                    format!("{topic} Official Documentation"),
                    url,
                    format!("Official documentation and reference for {topic}"),
                    ResourceType::Documentation,
                )]);
            }
            Ok(response) => {
                debug!(%url, status = %response.status(), "documentation probe miss");
            }
            Err(e) => {
                debug!(%url, error = %e, "documentation probe failed");
                errors += 1;
            }
        }
    }

    if !probes.is_empty() && errors == probes.len() {
        return Err(LearnScoutError::Network(
            "all documentation probes failed".into(),
        ));
    }

    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_successful_probe_wins() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("HEAD"))
            .and(wiremock::matchers::path("/missing/rust"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;

        wiremock::Mock::given(wiremock::matchers::method("HEAD"))
            .and(wiremock::matchers::path("/docs/rust"))
            .respond_with(wiremock::ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let probes = vec![
            format!("{}/missing/{{topic}}", server.uri()),
            format!("{}/docs/{{topic}}", server.uri()),
            format!("{}/never-reached/{{topic}}", server.uri()),
        ];

        let client = Client::new();
        let resources = fetch(&client, &probes, "Rust", 5).await.unwrap();

        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].title, "Rust Official Documentation");
        assert!(resources[0].url.ends_with("/docs/rust"));
        assert_eq!(resources[0].resource_type, ResourceType::Documentation);
    }

    #[tokio::test]
    async fn no_successful_probe_contributes_nothing() {
        let server = wiremock::MockServer::start().await;

        wiremock::Mock::given(wiremock::matchers::method("HEAD"))
            .respond_with(wiremock::ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let probes = vec![format!("{}/docs/{{topic}}", server.uri())];
        let client = Client::new();
        let resources = fetch(&client, &probes, "rust", 5).await.unwrap();
        assert!(resources.is_empty());
    }

    #[tokio::test]
    async fn all_probes_erroring_fails_the_adapter() {
        // Unroutable per RFC 5737; connection errors immediately or times out.
        let probes = vec!["http://192.0.2.1:9/docs/{topic}".to_string()];
        let client = Client::new();
        let result = fetch(&client, &probes, "rust", 1).await;
        assert!(result.is_err());
    }
}
