//! Core data structures for the service topology graph

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single node in the topology graph.
///
/// `id` is the caller-supplied identity key, unique within a graph.
/// `index` is the node's position inside the graph's node collection,
/// assigned on placement; wire payloads carry no index. Everything the
/// producer sends beyond those two fields (group, type, state, label, …)
/// is opaque payload the core never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Node {
            id: id.into(),
            index: None,
            attributes: Map::new(),
        }
    }

    /// A node with no id and no attributes carries nothing worth storing.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.attributes.is_empty()
    }

    /// Handle for use as a link endpoint once this node sits at `index`.
    pub fn to_ref(&self, index: usize) -> NodeRef {
        NodeRef {
            index,
            id: self.id.clone(),
        }
    }
}

/// A resolved link endpoint: the referenced node's position plus its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
    pub index: usize,
    pub id: String,
}

/// One end of a link.
///
/// Wire payloads reference nodes by integer position (`Index`);
/// normalization resolves endpoints to `Node` handles. The tag replaces
/// the value-type sniffing the visualization layer would otherwise need:
/// every consumer dispatches on the variant, never on "is this numeric".
/// An `Index` endpoint surviving normalization is a dangling reference,
/// kept as-is rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Index(usize),
    Node(NodeRef),
}

impl Endpoint {
    /// The node position this endpoint refers to, whichever form it is in.
    pub fn index(&self) -> usize {
        match self {
            Endpoint::Index(i) => *i,
            Endpoint::Node(node_ref) => node_ref.index,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Endpoint::Node(_))
    }
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: Endpoint,
    pub target: Endpoint,
}

impl Link {
    /// An unresolved link referencing both endpoints by position.
    pub fn index_form(source: usize, target: usize) -> Self {
        Link {
            source: Endpoint::Index(source),
            target: Endpoint::Index(target),
        }
    }

    /// A fully resolved link.
    pub fn reference(source: NodeRef, target: NodeRef) -> Self {
        Link {
            source: Endpoint::Node(source),
            target: Endpoint::Node(target),
        }
    }

    /// Index form means *both* endpoints are positional.
    pub fn is_index_form(&self) -> bool {
        !self.source.is_resolved() && !self.target.is_resolved()
    }

    /// Reference form means *both* endpoints are resolved node handles.
    pub fn is_reference_form(&self) -> bool {
        self.source.is_resolved() && self.target.is_resolved()
    }

    /// Whether either endpoint refers to the node at `node_index`.
    pub fn touches(&self, node_index: usize) -> bool {
        self.source.index() == node_index || self.target.index() == node_index
    }

    /// Edge equality: source and target indices match pairwise.
    /// Directional — `(a, b)` is not equal to `(b, a)`.
    pub fn edge_equal(&self, other: &Link) -> bool {
        self.source.index() == other.source.index()
            && self.target.index() == other.target.index()
    }
}

impl From<RawLink> for Link {
    fn from(raw: RawLink) -> Self {
        Link::index_form(raw.source, raw.target)
    }
}

/// The graph value held by the store and handed to the visualization layer.
///
/// Invariant: once links are normalized, every resolved endpoint's index
/// refers to a node actually present in `nodes`. Node id uniqueness is
/// enforced on insertion only; the model never retroactively deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Links with at least one endpoint still in positional form.
    pub fn unresolved_link_count(&self) -> usize {
        self.links.iter().filter(|l| !l.is_reference_form()).count()
    }
}

/// A link as it appears on the wire: endpoints by integer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLink {
    pub source: usize,
    pub target: usize,
}

/// The fetch payload shape: `{ nodes, links }` with index-based links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<RawLink>,
}
