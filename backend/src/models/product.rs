use serde::{Deserialize, Serialize};

/// Catalog entry. `price` is an opaque display string ("£20.00") and is
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: String,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
        }
    }

    /// Plain containment on the lower-cased name. `needle` must already be
    /// lower-cased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ProductFilters {
    pub q: Option<String>,
}

impl ProductFilters {
    /// The search term, or `None` when absent or empty.
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

// ── Responses ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_contains_ignores_case() {
        let p = Product::new(1, "Clash of the Tietans", "£20.00");
        assert!(p.name_contains("clash"));
        assert!(p.name_contains("tietans"));
        assert!(!p.name_contains("trousers"));
    }

    #[test]
    fn name_contains_is_not_tokenized() {
        let p = Product::new(1, "Clash of the Tietans", "£20.00");
        assert!(p.name_contains("h of t"), "substring may span words");
        assert!(!p.name_contains("clash tietans"));
    }

    #[test]
    fn json_shape_matches_wire_format() {
        let p = Product::new(2, "Tieland", "£12.50");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(
            v,
            serde_json::json!({ "id": 2, "name": "Tieland", "price": "£12.50" })
        );
    }

    #[test]
    fn price_is_kept_verbatim() {
        let p: Product =
            serde_json::from_str(r#"{"id":7,"name":"Odd","price":"about a tenner"}"#).unwrap();
        assert_eq!(p.price, "about a tenner");
    }

    #[test]
    fn empty_query_is_no_filter() {
        let filters = ProductFilters { q: Some(String::new()) };
        assert_eq!(filters.search(), None);
        assert_eq!(ProductFilters::default().search(), None);
        let filters = ProductFilters { q: Some("tie".to_string()) };
        assert_eq!(filters.search(), Some("tie"));
    }
}
