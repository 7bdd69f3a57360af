// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Loading, ErrorDisplay)
// - search.rs: Search input widget
// - product_table.rs: Inventory table (card + table layouts)

pub mod common;
pub mod search;
pub mod product_table;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use product_table::*;
