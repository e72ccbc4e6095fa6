//! Resource discovery pipeline for LearnScout.
//!
//! This crate provides:
//! - [`adapters`] — per-platform source adapters contributing candidates
//! - [`score`] — the pure relevance/quality scoring heuristic
//! - [`rank`] — filtering, ordering, truncation, and novelty checks
//! - [`fallback`] — the network-free fallback link generator
//! - [`discover_resources`] — the pipeline entry point tying it together
//!
//! Control flow: the caller supplies a topic, all enabled adapters run
//! concurrently to completion, their successes are merged, scored, and
//! ranked. If not a single adapter succeeds (or ranking leaves nothing),
//! the fallback list is returned instead. The pipeline never fails.

pub mod adapters;
pub mod fallback;
pub mod rank;
pub mod score;

use std::time::Duration;

use reqwest::Client;
use tracing::{info, instrument, warn};

use learnscout_shared::{DiscoveryConfig, LearnScoutError, Resource, Result};

use adapters::{articles, community, courses, docs, github, opencourseware, stackoverflow};

pub use adapters::Endpoints;
pub use fallback::{FALLBACK_COUNT, fallback_resources};
pub use rank::{filter_novel, rank};
pub use score::score;

/// User-Agent string for discovery requests.
const USER_AGENT: &str = concat!("LearnScout/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects to follow on scraped search pages.
const MAX_REDIRECTS: usize = 3;

// ---------------------------------------------------------------------------
// Source kinds and options
// ---------------------------------------------------------------------------

/// The individual source adapters, addressable for enabling/disabling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    GitHub,
    StackOverflow,
    Medium,
    DevTo,
    Reddit,
    DocsProbe,
    Courses,
    OpenCourseware,
}

impl SourceKind {
    /// All built-in sources, in aggregation order.
    pub fn all() -> Vec<SourceKind> {
        vec![
            Self::GitHub,
            Self::StackOverflow,
            Self::Medium,
            Self::DevTo,
            Self::Reddit,
            Self::DocsProbe,
            Self::Courses,
            Self::OpenCourseware,
        ]
    }
}

/// Runtime options for a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Maximum number of resources in the ranked result.
    pub max_results: usize,
    /// Maximum parsed entries per scraped search query.
    pub results_per_source: usize,
    /// Timeout in seconds for documentation HEAD probes.
    pub probe_timeout_secs: u64,
    /// Which sources to aggregate from.
    pub sources: Vec<SourceKind>,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self {
            max_results: learnscout_shared::MAX_RESULTS,
            results_per_source: 3,
            probe_timeout_secs: 5,
            sources: SourceKind::all(),
        }
    }
}

impl From<&DiscoveryConfig> for DiscoverOptions {
    fn from(config: &DiscoveryConfig) -> Self {
        Self {
            max_results: config.max_results,
            results_per_source: config.results_per_source,
            probe_timeout_secs: config.probe_timeout_secs,
            sources: SourceKind::all(),
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP client
// ---------------------------------------------------------------------------

/// Build the shared HTTP client used by all network adapters.
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| LearnScoutError::Network(format!("failed to build HTTP client: {e}")))
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Merged output of the adapter fan-out.
struct Gathered {
    candidates: Vec<Resource>,
    adapters_succeeded: usize,
    adapters_failed: usize,
}

/// Await a future only when its source is enabled.
async fn run_if<F>(enabled: bool, fut: F) -> Option<Result<Vec<Resource>>>
where
    F: Future<Output = Result<Vec<Resource>>>,
{
    if enabled { Some(fut.await) } else { None }
}

/// Run all enabled adapters concurrently and merge their successes.
///
/// Every adapter runs to completion; a failure is logged and counted but
/// never blocks or aborts a sibling.
async fn gather_candidates(
    client: &Client,
    topic: &str,
    endpoints: &Endpoints,
    opts: &DiscoverOptions,
) -> Gathered {
    let on = |kind: SourceKind| opts.sources.contains(&kind);

    let (gh, so, medium, devto, reddit, doc, course, ocw) = tokio::join!(
        run_if(
            on(SourceKind::GitHub),
            github::fetch(client, &endpoints.github, topic, opts.results_per_source),
        ),
        run_if(
            on(SourceKind::StackOverflow),
            stackoverflow::fetch(client, &endpoints.stackoverflow, topic, opts.results_per_source),
        ),
        run_if(on(SourceKind::Medium), async {
            Ok(articles::medium(topic))
        }),
        run_if(on(SourceKind::DevTo), async { Ok(articles::devto(topic)) }),
        run_if(on(SourceKind::Reddit), async {
            Ok(community::reddit(topic))
        }),
        run_if(
            on(SourceKind::DocsProbe),
            docs::fetch(client, &endpoints.doc_probes, topic, opts.probe_timeout_secs),
        ),
        run_if(on(SourceKind::Courses), async {
            Ok(courses::platforms(topic))
        }),
        run_if(on(SourceKind::OpenCourseware), async {
            Ok(opencourseware::catalogs(topic))
        }),
    );

    let outcomes = [
        ("github", gh),
        ("stackoverflow", so),
        ("medium", medium),
        ("devto", devto),
        ("reddit", reddit),
        ("docs-probe", doc),
        ("courses", course),
        ("opencourseware", ocw),
    ];

    let mut gathered = Gathered {
        candidates: Vec::new(),
        adapters_succeeded: 0,
        adapters_failed: 0,
    };

    for (source, outcome) in outcomes {
        match outcome {
            Some(Ok(resources)) => {
                tracing::debug!(source, count = resources.len(), "source contributed");
                gathered.candidates.extend(resources);
                gathered.adapters_succeeded += 1;
            }
            Some(Err(e)) => {
                warn!(source, error = %e, "source adapter failed");
                gathered.adapters_failed += 1;
            }
            None => {}
        }
    }

    gathered
}

// ---------------------------------------------------------------------------
// Pipeline entry point
// ---------------------------------------------------------------------------

/// Discover learning resources for a topic.
///
/// Always returns a non-empty, well-formed list: when every enabled adapter
/// fails, or every candidate is filtered out, the static fallback links are
/// returned instead. Partial adapter failure is tolerated silently.
#[instrument(skip(client, endpoints, opts), fields(topic = %topic))]
pub async fn discover_resources(
    client: &Client,
    topic: &str,
    endpoints: &Endpoints,
    opts: &DiscoverOptions,
) -> Vec<Resource> {
    let gathered = gather_candidates(client, topic, endpoints, opts).await;

    if gathered.adapters_succeeded == 0 {
        warn!(
            failed = gathered.adapters_failed,
            "no source adapter succeeded, returning fallback links"
        );
        return fallback::fallback_resources(topic);
    }

    let ranked = rank::rank(gathered.candidates, topic, opts.max_results);

    if ranked.is_empty() {
        warn!("all candidates filtered out, returning fallback links");
        return fallback::fallback_resources(topic);
    }

    info!(
        results = ranked.len(),
        succeeded = gathered.adapters_succeeded,
        failed = gathered.adapters_failed,
        "resource discovery completed"
    );

    ranked
}
