// web_app/server_fns.rs - Leptos server function declarations
//
// Server function declarations accessible from both client (WASM) and
// server (native Rust). The #[server] macro generates the server-side
// implementation and, on the client, a stub that calls it over HTTP.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::Product;

/// Fetch the product inventory, optionally narrowed by a search query
///
/// The query semantics live entirely in the catalog layer; the table
/// component just renders whatever comes back.
#[server(FetchProducts, "/api")]
pub async fn fetch_products(query: Option<String>) -> Result<Vec<Product>, ServerFnError> {
    use crate::web_app::api::catalog;

    let query = query.unwrap_or_default();
    tracing::debug!("fetching products, query={:?}", query);

    let products = catalog::search(&query).map_err(|e| {
        tracing::error!("catalog lookup failed: {}", e);
        ServerFnError::new(e.to_string())
    })?;

    tracing::info!("returning {} products", products.len());
    Ok(products)
}
