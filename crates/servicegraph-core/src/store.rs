//! Owned holder of the current graph value
//!
//! The store enforces the single-logical-writer assumption structurally:
//! reads copy the graph out and mutation goes through named operations,
//! so callers never hold a handle into the internal collections.

use tokio::sync::{RwLock, broadcast};
use tracing::debug;

use crate::editor::{self, EditOutcome, LinkUpdate, RemovalPolicy};
use crate::model::{Graph, Node};

/// Monotone fetch generation, used to drop stale fetch completions.
pub type Generation = u64;

/// What happened to a generation-tagged commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The graph was replaced and observers were notified.
    Committed,
    /// A newer fetch began after this one; the graph was left untouched.
    Stale,
}

/// Payload-free signals observable by the hosting application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    /// A fetched graph was normalized and committed.
    GraphLoaded,
}

struct StoreState {
    graph: Graph,
    generation: Generation,
}

/// Holds the graph for the lifetime of a session.
///
/// Created empty; replaced wholesale on fetch; mutated field-by-field by
/// the editor entry points below. Locking exists only so the async fetch
/// task and the UI driver can share the store safely — the design still
/// assumes one logical writer driving edits sequentially.
pub struct GraphStore {
    state: RwLock<StoreState>,
    events: broadcast::Sender<GraphEvent>,
}

impl GraphStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        GraphStore {
            state: RwLock::new(StoreState {
                graph: Graph::new(),
                generation: 0,
            }),
            events,
        }
    }

    /// Copy-out read of the current graph.
    pub async fn graph(&self) -> Graph {
        self.state.read().await.graph.clone()
    }

    /// Replace the held graph wholesale. No validation, no event.
    pub async fn replace(&self, graph: Graph) {
        self.state.write().await.graph = graph;
    }

    /// Observe [`GraphEvent`]s emitted by commits.
    pub fn subscribe(&self) -> broadcast::Receiver<GraphEvent> {
        self.events.subscribe()
    }

    /// Mark the start of a fetch. Any commit tagged with an earlier
    /// generation than the one returned here will be dropped as stale.
    pub async fn begin_fetch(&self) -> Generation {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.generation
    }

    /// Commit a fetched-and-normalized graph, unless a newer fetch has
    /// since begun. Emits [`GraphEvent::GraphLoaded`] on success.
    pub async fn commit(&self, generation: Generation, graph: Graph) -> CommitOutcome {
        let mut state = self.state.write().await;
        if generation != state.generation {
            debug!(
                generation,
                current = state.generation,
                "dropping stale graph commit"
            );
            return CommitOutcome::Stale;
        }
        state.graph = graph;
        drop(state);
        // Nobody listening is fine; the signal is best-effort.
        let _ = self.events.send(GraphEvent::GraphLoaded);
        CommitOutcome::Committed
    }

    /// Position of the node carrying `id` in the held graph, if any.
    pub async fn find_node_index(&self, id: &str) -> Option<usize> {
        let state = self.state.read().await;
        editor::find_node_index(&state.graph.nodes, id)
    }

    /// Append a node to the held graph under the editor's insertion rules.
    pub async fn add_node(&self, node: Node) -> EditOutcome {
        let mut state = self.state.write().await;
        editor::add_node(&mut state.graph.nodes, node)
    }

    /// Replace the held link list with the reconciliation of `update`
    /// against it.
    pub async fn apply_link_update(&self, update: Option<&LinkUpdate>) {
        let mut state = self.state.write().await;
        state.graph.links = editor::update_node_links(&state.graph.links, update);
    }

    /// Drop all links touching the node at `node_index` from the held
    /// graph. Call before deleting that node.
    pub async fn remove_node_links(&self, node_index: usize, policy: RemovalPolicy) {
        let mut state = self.state.write().await;
        state.graph.links =
            editor::remove_links_for_node(&state.graph.links, node_index, policy);
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
