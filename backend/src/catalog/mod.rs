use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Product;

/// Process-wide product collection. Cheap to clone; every clone sees the
/// same snapshot.
///
/// The lock only guards the pointer swap: readers clone the inner `Arc` and
/// scan outside the lock, so a reader holds either the previous collection or
/// the replacement in full.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    inner: Arc<RwLock<Arc<Vec<Product>>>>,
}

impl Catalog {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(products))),
        }
    }

    pub async fn snapshot(&self) -> Arc<Vec<Product>> {
        Arc::clone(&*self.inner.read().await)
    }

    /// Swap in a whole new collection. Nothing of the previous one survives
    /// unless it is also in `products`.
    #[allow(dead_code)]
    pub async fn replace(&self, products: Vec<Product>) {
        *self.inner.write().await = Arc::new(products);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn search(&self, query: Option<&str>) -> Vec<Product> {
        filter_by_name(&self.snapshot().await, query)
    }

    pub async fn find(&self, id: i64) -> Option<Product> {
        find_by_id(&self.snapshot().await, id).cloned()
    }
}

// ── Scans ─────────────────────────────────────────────────────────────────────

/// Products whose name contains `query` case-insensitively, in stored order.
/// `None` or an empty query returns everything.
pub fn filter_by_name(products: &[Product], query: Option<&str>) -> Vec<Product> {
    match query.filter(|q| !q.is_empty()) {
        None => products.to_vec(),
        Some(q) => {
            let needle = q.to_lowercase();
            products
                .iter()
                .filter(|p| p.name_contains(&needle))
                .cloned()
                .collect()
        }
    }
}

/// First product with `id` in stored order.
pub fn find_by_id(products: &[Product], id: i64) -> Option<&Product> {
    products.iter().find(|p| p.id == id)
}

/// Path segment to product id. Surrounding whitespace is tolerated; anything
/// else that isn't an integer yields `None`.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
