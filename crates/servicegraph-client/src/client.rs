//! HTTP fetch boundary for the graph endpoint

use servicegraph_core::editor::normalize_graph;
use servicegraph_core::model::{Graph, RawGraph};
use servicegraph_core::store::{CommitOutcome, GraphStore};
use thiserror::Error;
use tracing::{debug, info};

/// Why a graph fetch failed. The stored graph is left untouched on every
/// variant.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("graph request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("graph endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("graph payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// What a [`GraphClient::refresh`] round trip produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The normalized graph, committed to the store.
    Loaded(Graph),
    /// A newer refresh started while this one was in flight; its result
    /// was discarded and the store kept the newer graph.
    Stale,
}

/// Client for the dashboard backend's graph endpoint.
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GraphClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn graph_url(&self) -> String {
        format!("{}/graph", self.base_url)
    }

    /// GET the raw wire graph: `{ nodes, links }` with index-based links.
    pub async fn fetch_graph(&self) -> Result<RawGraph, FetchError> {
        let url = self.graph_url();
        debug!(%url, "requesting graph");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        let raw: RawGraph = serde_json::from_str(&body)?;
        debug!(
            nodes = raw.nodes.len(),
            links = raw.links.len(),
            "graph payload received"
        );
        Ok(raw)
    }

    /// Fetch, normalize, and commit into `store`.
    ///
    /// The commit carries the generation taken before the request went
    /// out, so a refresh overtaken by a newer one resolves to
    /// [`RefreshOutcome::Stale`] instead of clobbering the newer graph.
    /// Observers of the store see a `GraphLoaded` event on commit.
    pub async fn refresh(&self, store: &GraphStore) -> Result<RefreshOutcome, FetchError> {
        let generation = store.begin_fetch().await;
        let raw = self.fetch_graph().await?;
        let graph = normalize_graph(raw);

        match store.commit(generation, graph.clone()).await {
            CommitOutcome::Committed => {
                info!(
                    nodes = graph.node_count(),
                    links = graph.link_count(),
                    unresolved = graph.unresolved_link_count(),
                    "graph loaded"
                );
                Ok(RefreshOutcome::Loaded(graph))
            }
            CommitOutcome::Stale => {
                info!(generation, "graph refresh superseded; result discarded");
                Ok(RefreshOutcome::Stale)
            }
        }
    }
}
