//! Music catalog search API.
//!
//! [`CatalogApi`] is the seam between the query executor and the network.
//! Production code uses [`DeezerClient`]; tests substitute the mocks below.

mod client;
mod dto;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::model::Album;

pub use client::DeezerClient;

/// Album search against a remote catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search albums matching `query`, in the order the catalog ranks them.
    async fn search_albums(&self, query: &str) -> Result<Vec<Album>, CatalogError>;
}
