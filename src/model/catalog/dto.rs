//! Deezer search API data transfer objects
//!
//! These types match what `GET /search/album` returns. Only the fields the
//! browser reads are declared; serde ignores the rest. Convert to
//! [`Album`] before leaving the catalog module.

use serde::Deserialize;

use crate::model::Album;

/// Top-level search response.
///
/// Deezer reports quota and parameter problems with HTTP 200 and an
/// `error` object instead of `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<AlbumRecord>,
    pub total: Option<u64>,
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub cover_small: Option<String>,
    #[serde(default)]
    pub cover_medium: Option<String>,
    #[serde(default)]
    pub cover_big: Option<String>,
    pub release_date: Option<String>,
    pub nb_tracks: Option<u32>,
    pub artist: ArtistRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
}

impl From<AlbumRecord> for Album {
    fn from(record: AlbumRecord) -> Self {
        Album {
            id: record.id,
            title: record.title,
            artist: record.artist.name,
            cover_small: record.cover_small.unwrap_or_default(),
            cover_medium: record.cover_medium.unwrap_or_default(),
            cover_big: record.cover_big.unwrap_or_default(),
            release_date: record.release_date,
            track_count: record.nb_tracks,
        }
    }
}
