//! Servicegraph Core — graph data model, editor operations, and store

pub mod catalog;
pub mod editor;
pub mod model;
pub mod store;


pub use catalog::{CatalogEntry, LifecycleState, NodeType, UnknownKey};
pub use editor::{
    EditOutcome, LinkUpdate, RejectReason, RemovalPolicy, add_link, add_node, find_node_index,
    link_exists, normalize_graph, normalize_links, remove_links_for_node, update_node_links,
};
pub use model::{Endpoint, Graph, Link, Node, NodeRef, RawGraph, RawLink};
pub use store::{CommitOutcome, Generation, GraphEvent, GraphStore};
