use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::models::Product;

/// Read a JSON array of products to serve from startup.
pub async fn load_products(path: &Path) -> anyhow::Result<Vec<Product>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let products = parse_products(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;
    info!(count = products.len(), path = %path.display(), "Loaded seed products");
    Ok(products)
}

fn parse_products(raw: &str) -> serde_json::Result<Vec<Product>> {
    serde_json::from_str(raw)
}
