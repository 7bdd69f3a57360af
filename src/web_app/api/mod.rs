// web_app/api/mod.rs - Server-side data supply (SSR only)
//
// This module stands in for the upstream data-fetching layer. The UI never
// talks to it directly; everything goes through the server functions.

pub mod catalog;
