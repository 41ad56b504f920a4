use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::{
    catalog,
    error::{AppError, AppResult},
    models::{Product, ProductFilters, ProductList},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

/// A query string that fails to deserialize is treated as no filter.
pub async fn list_products(
    State(state): State<AppState>,
    filters: Option<Query<ProductFilters>>,
) -> Json<ProductList> {
    let filters = filters.map(|Query(f)| f).unwrap_or_default();
    let start = Instant::now();
    let products = state.catalog.search(filters.search()).await;
    let elapsed = start.elapsed();

    info!(
        count = products.len(),
        query = filters.search().unwrap_or(""),
        elapsed_ms = elapsed.as_millis(),
        "Listed products"
    );

    Json(ProductList { products })
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    let not_found = || AppError::NotFound(format!("Product {} not found", raw_id));

    let id = catalog::parse_id(&raw_id).ok_or_else(not_found)?;
    let product = state.catalog.find(id).await.ok_or_else(not_found)?;

    info!(id = product.id, name = %product.name, "Fetched product");

    Ok(Json(product))
}
