// web_app/api/catalog.rs - In-memory product catalog
//
// Demo inventory embedded at compile time. Parsed once into a global,
// then served read-only. The search query is matched case-insensitively
// against name and category; result order follows catalog order.

use std::sync::OnceLock;

use crate::web_app::model::Product;

static CATALOG_JSON: &str = include_str!("../../../data/products.json");

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All products in catalog order.
pub fn products() -> Result<&'static [Product], CatalogError> {
    if let Some(products) = CATALOG.get() {
        return Ok(products);
    }

    let parsed: Vec<Product> = serde_json::from_str(CATALOG_JSON)?;
    tracing::info!("loaded catalog with {} products", parsed.len());

    // A concurrent first call may have won the race; get_or_init keeps
    // whichever value landed first.
    Ok(CATALOG.get_or_init(|| parsed))
}

/// Products whose name or category contains the query, case-insensitive.
///
/// An empty query returns the whole catalog.
pub fn search(query: &str) -> Result<Vec<Product>, CatalogError> {
    let all = products()?;

    if query.is_empty() {
        return Ok(all.to_vec());
    }

    let needle = query.to_lowercase();
    Ok(all
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let all = products().expect("catalog should parse");
        assert!(!all.is_empty());
    }

    #[test]
    fn test_catalog_has_unique_ids() {
        let all = products().unwrap();
        let mut ids: Vec<i32> = all.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = products().unwrap();
        let found = search("").unwrap();
        assert_eq!(found.len(), all.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = search("electronics").unwrap();
        let upper = search("ELECTRONICS").unwrap();
        assert_eq!(lower.len(), upper.len());
        assert!(!lower.is_empty());
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let found = search("").unwrap();
        let ids: Vec<i32> = found.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        // Catalog data is authored in id order, so filtered output
        // should come back the same way.
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_search_no_match_is_empty_not_error() {
        let found = search("definitely-not-a-product").unwrap();
        assert!(found.is_empty());
    }
}
