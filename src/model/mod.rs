//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the application.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (sections, grid movement, UI state)
//! - `content`: Album data and cover fallbacks
//! - `search`: Committed query, result set and loading status transitions
//! - `detail`: Selected album and placeholder transport state
//! - `catalog`: Catalog search API trait and Deezer client
//! - `app_model`: Main application model with state management methods

mod types;
mod content;
mod search;
mod detail;
pub mod catalog;
mod app_model;

// Re-export all public types for convenient access
pub use types::{ActiveSection, GridMove, MAX_GRID_COLUMNS, UiState};

pub use content::Album;
#[cfg(test)]
pub(crate) use content::sample_album;

pub use search::{
    CommitOutcome, LoadingStatus, SearchRequestToken, SearchSnapshot, MAX_RESULTS,
};
#[cfg(test)]
pub(crate) use search::SEARCH_FAILED_MESSAGE;

pub use detail::{AlbumDetailState, TransportAction};

pub use catalog::{CatalogApi, DeezerClient};

pub use app_model::AppModel;
