//! Static lookup catalogs for the dashboard's filter panels
//!
//! These are fixed configuration data, not derived from the graph. Order
//! and key/value pairs are part of the contract with the visualization
//! layer and must not change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One entry of a lookup catalog, as the UI consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub value: &'static str,
}

/// Raised when parsing a catalog key that is not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog key: {0}")]
pub struct UnknownKey(pub String);

/// Lifecycle state of a service node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Up,
    Down,
    Unknown,
    Virtual,
}

impl LifecycleState {
    pub const ALL: [LifecycleState; 4] = [
        LifecycleState::Up,
        LifecycleState::Down,
        LifecycleState::Unknown,
        LifecycleState::Virtual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Up => "UP",
            LifecycleState::Down => "DOWN",
            LifecycleState::Unknown => "UNKNOWN",
            LifecycleState::Virtual => "VIRTUAL",
        }
    }
}

impl std::str::FromStr for LifecycleState {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// What kind of component a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Resource,
    Microservice,
    Db,
    Soap,
    Rest,
    Jms,
    UiComponent,
}

impl NodeType {
    pub const ALL: [NodeType; 7] = [
        NodeType::Resource,
        NodeType::Microservice,
        NodeType::Db,
        NodeType::Soap,
        NodeType::Rest,
        NodeType::Jms,
        NodeType::UiComponent,
    ];

    /// Wire name, as carried in node payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Resource => "RESOURCE",
            NodeType::Microservice => "MICROSERVICE",
            NodeType::Db => "DB",
            NodeType::Soap => "SOAP",
            NodeType::Rest => "REST",
            NodeType::Jms => "JMS",
            NodeType::UiComponent => "UI_COMPONENT",
        }
    }

    /// Catalog key shown to the user. Only `UI_COMPONENT` differs from
    /// the wire name.
    pub fn key(&self) -> &'static str {
        match self {
            NodeType::UiComponent => "UI",
            other => other.as_str(),
        }
    }
}

impl std::str::FromStr for NodeType {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Group codes of the organization's service landscape.
pub const GROUP_CODES: [&str; 14] = [
    "BCI", "BPS", "BUSC", "CRMODS", "CSL", "IMA", "MBP", "NGRP", "OCT", "PDB", "PPT", "RHE",
    "ROSY", "SAPACHE",
];

/// Ordered group catalog; key and value coincide.
pub fn groups() -> Vec<CatalogEntry> {
    GROUP_CODES
        .iter()
        .map(|code| CatalogEntry {
            key: code,
            value: code,
        })
        .collect()
}

/// Ordered lifecycle-state catalog; key and value coincide.
pub fn states() -> Vec<CatalogEntry> {
    LifecycleState::ALL
        .iter()
        .map(|state| CatalogEntry {
            key: state.as_str(),
            value: state.as_str(),
        })
        .collect()
}

/// Ordered node-type catalog. Keys match wire names except for the UI
/// component, whose key is the short label "UI".
pub fn types() -> Vec<CatalogEntry> {
    NodeType::ALL
        .iter()
        .map(|t| CatalogEntry {
            key: t.key(),
            value: t.as_str(),
        })
        .collect()
}
