//! Remote catalog access: wire types, query construction, and the HTTP
//! client for the paged `/videos` listing.

pub mod client;
pub mod query;
pub mod types;

pub use client::CatalogClient;
pub use types::{CatalogError, PageRequest, PageResponse, Video};
