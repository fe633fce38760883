//! Pure graph-editing operations
//!
//! Every function here is total: malformed input yields a documented
//! no-op or empty result, never a panic or an error. Callers that need
//! to distinguish "nothing to do" from "declined" inspect the returned
//! [`EditOutcome`].

use crate::model::{Endpoint, Graph, Link, Node, RawGraph};

/// Result of a mutating editor operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The element was appended at this position.
    Inserted(usize),
    /// An edge-equal element was already present; nothing changed.
    Unchanged,
    /// The input violated an insertion precondition; nothing changed.
    Rejected(RejectReason),
}

/// Why an insertion was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The node collection is empty; nodes are only added to a live graph.
    EmptyGraph,
    /// The candidate node carries no id and no attributes.
    EmptyNode,
    /// The candidate node has attributes but no id to key it by.
    MissingId,
    /// Another node already holds this id.
    DuplicateId,
}

/// Resolve a wire payload into a graph with reference-form links.
///
/// Assigns each node its position as `index`, then resolves link
/// endpoints via [`normalize_links`].
pub fn normalize_graph(raw: RawGraph) -> Graph {
    let RawGraph { mut nodes, links } = raw;
    for (i, node) in nodes.iter_mut().enumerate() {
        node.index = Some(i);
    }
    let links = links.into_iter().map(Link::from).collect();
    let links = normalize_links(&nodes, links);
    Graph { nodes, links }
}

/// Resolve positional link endpoints against the node collection.
///
/// For the node at position `i`, a link whose source is `Index(i)` gets a
/// resolved source; otherwise a matching target gets resolved. Per node
/// and per link at most one endpoint resolves in a pass, so a self-loop
/// comes out with a resolved source and a positional target. Endpoints
/// referencing no node stay positional (dangling, not an error), and
/// already-resolved endpoints are never re-matched, which makes this the
/// identity on a fully reference-form list.
pub fn normalize_links(nodes: &[Node], mut links: Vec<Link>) -> Vec<Link> {
    for (i, node) in nodes.iter().enumerate() {
        for link in links.iter_mut() {
            if matches!(link.source, Endpoint::Index(s) if s == i) {
                link.source = Endpoint::Node(node.to_ref(i));
            } else if matches!(link.target, Endpoint::Index(t) if t == i) {
                link.target = Endpoint::Node(node.to_ref(i));
            }
        }
    }
    links
}

// TODO: centralize index state; repeated lookups re-scan every time.
/// Position of the first node carrying `id`, if any. Linear scan.
pub fn find_node_index(nodes: &[Node], id: &str) -> Option<usize> {
    nodes.iter().position(|n| n.id == id)
}

/// Append `node` to a non-empty collection, enforcing id uniqueness.
///
/// Declines (without error) when the collection is empty, the node is
/// empty, the node has no id, or the id is already taken. On success the
/// node's `index` becomes the collection length at insertion time.
pub fn add_node(nodes: &mut Vec<Node>, mut node: Node) -> EditOutcome {
    if nodes.is_empty() {
        return EditOutcome::Rejected(RejectReason::EmptyGraph);
    }
    if node.is_empty() {
        return EditOutcome::Rejected(RejectReason::EmptyNode);
    }
    if node.id.is_empty() {
        return EditOutcome::Rejected(RejectReason::MissingId);
    }
    if find_node_index(nodes, &node.id).is_some() {
        return EditOutcome::Rejected(RejectReason::DuplicateId);
    }
    let index = nodes.len();
    node.index = Some(index);
    nodes.push(node);
    EditOutcome::Inserted(index)
}

/// Whether a link from `source_index` to `target_index` is present.
/// Directional, first match wins; works on either link form since the
/// comparison goes through [`Endpoint::index`].
pub fn link_exists(links: &[Link], source_index: usize, target_index: usize) -> bool {
    links
        .iter()
        .any(|l| l.source.index() == source_index && l.target.index() == target_index)
}

/// Append `link` unless an edge-equal link is already present.
/// Assumes both the link and the collection are reference form.
pub fn add_link(links: &mut Vec<Link>, link: Link) -> EditOutcome {
    if link_exists(links, link.source.index(), link.target.index()) {
        return EditOutcome::Unchanged;
    }
    let index = links.len();
    links.push(link);
    EditOutcome::Inserted(index)
}

/// How [`remove_links_for_node`] treats index-form links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Compatibility behavior: an index-form link is kept iff its
    /// *source* equals the removed node's index. Almost certainly an
    /// oversight upstream; kept selectable until confirmed.
    Legacy,
    /// A link is kept only if neither endpoint matches, regardless of form.
    #[default]
    Symmetric,
}

/// Drop every link touching the node at `node_index`.
///
/// Call this before deleting a node so the edge set stays consistent with
/// the surviving node set. Reference-form links are filtered on both
/// endpoints under either policy; the policies diverge only on index-form
/// links (see [`RemovalPolicy::Legacy`]).
pub fn remove_links_for_node(links: &[Link], node_index: usize, policy: RemovalPolicy) -> Vec<Link> {
    links
        .iter()
        .filter(|link| match policy {
            RemovalPolicy::Legacy if link.is_index_form() => link.source.index() == node_index,
            _ => !link.touches(node_index),
        })
        .cloned()
        .collect()
}

/// A proposed replacement for one node's outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkUpdate {
    /// The node whose edges are being retargeted.
    pub source_index: usize,
    /// The proposed edge set for that node.
    pub to_links: Vec<Link>,
}

/// Reconcile a full link list against a proposed edge set for one node.
///
/// The returned list is:
/// 1. every input link not touching the update's node, unconditionally
///    (this is what scopes the edit without the caller pre-filtering);
/// 2. every input link touching the node that has an edge-equal entry in
///    `to_links` (unchanged edges survive in place, the rest drop out);
/// 3. every `to_links` entry with no edge-equal match in the *input*
///    list, appended in proposal order.
///
/// Input order is preserved for 1 and 2; no output pair is edge-equal.
/// A missing update yields an empty list, not an error.
pub fn update_node_links(links: &[Link], update: Option<&LinkUpdate>) -> Vec<Link> {
    let Some(update) = update else {
        return Vec::new();
    };
    let source = update.source_index;

    let mut result: Vec<Link> = links
        .iter()
        .filter(|link| !link.touches(source) || has_equal_link(link, &update.to_links))
        .cloned()
        .collect();

    for candidate in &update.to_links {
        if !has_equal_link(candidate, links) && !has_equal_link(candidate, &result) {
            result.push(candidate.clone());
        }
    }
    result
}

fn has_equal_link(link: &Link, links: &[Link]) -> bool {
    links.iter().any(|other| link.edge_equal(other))
}
