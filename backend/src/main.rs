use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod seed;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::Product;

/// Shared application state, cheap to clone (the catalog lives behind Arc).
#[derive(Clone, Default)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    /// Fresh state serving exactly `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            catalog: Catalog::with_products(products),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Catalog Service  — Rust + Axum      ║");
    info!("╚══════════════════════════════════════╝");

    let products = match &config.seed_file {
        Some(path) => seed::load_products(path).await?,
        None => Vec::new(),
    };
    let state = AppState::with_products(products);

    let app = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Catalog API is running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Products ────────────────────────────────────────────────────────
        .route("/products", get(handlers::products::list_products))
        .route("/products/:id", get(handlers::products::get_product))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
