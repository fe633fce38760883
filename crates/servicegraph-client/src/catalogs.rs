//! Async accessors for the static lookup catalogs
//!
//! These resolve immediately — the async surface exists so the hosting
//! application consumes catalogs and graph data through one contract.

use servicegraph_core::catalog::{self, CatalogEntry};

/// Ordered group-code catalog.
pub async fn groups() -> Vec<CatalogEntry> {
    catalog::groups()
}

/// Ordered lifecycle-state catalog.
pub async fn states() -> Vec<CatalogEntry> {
    catalog::states()
}

/// Ordered node-type catalog.
pub async fn types() -> Vec<CatalogEntry> {
    catalog::types()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catalogs_resolve_with_contract_data() {
        assert_eq!(groups().await.len(), 14);

        let states = states().await;
        assert_eq!(states.first().map(|e| e.key), Some("UP"));

        let types = types().await;
        let ui = types.iter().find(|e| e.key == "UI").unwrap();
        assert_eq!(ui.value, "UI_COMPONENT");
    }
}
