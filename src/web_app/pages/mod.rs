// web_app/pages/mod.rs - Page components module
//
// Page-level Leptos components:
// - InventoryPage: product inventory table with search

pub mod inventory;

// Re-export page components
pub use inventory::InventoryPage;
