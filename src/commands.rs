//! CLI command implementations

use servicegraph_client::{GraphClient, RefreshOutcome, catalogs as catalog_data};
use servicegraph_core::GraphStore;

pub async fn fetch(base_url: String) -> anyhow::Result<()> {
    tracing::info!("Fetching graph from {}", base_url);

    let store = GraphStore::new();
    let client = GraphClient::new(base_url);

    match client.refresh(&store).await? {
        RefreshOutcome::Loaded(graph) => {
            tracing::info!(
                "Loaded {} nodes, {} links ({} unresolved)",
                graph.node_count(),
                graph.link_count(),
                graph.unresolved_link_count()
            );
            for node in &graph.nodes {
                println!(
                    "{:>4}  {}",
                    node.index.map(|i| i.to_string()).unwrap_or_default(),
                    node.id
                );
            }
        }
        RefreshOutcome::Stale => {
            tracing::warn!("Refresh superseded before completion");
        }
    }

    Ok(())
}

pub async fn catalogs() -> anyhow::Result<()> {
    println!("groups:");
    for entry in catalog_data::groups().await {
        println!("  {} = {}", entry.key, entry.value);
    }
    println!("states:");
    for entry in catalog_data::states().await {
        println!("  {} = {}", entry.key, entry.value);
    }
    println!("types:");
    for entry in catalog_data::types().await {
        println!("  {} = {}", entry.key, entry.value);
    }
    Ok(())
}
