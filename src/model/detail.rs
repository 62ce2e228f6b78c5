//! Detail view state for the selected album.
//!
//! The transport controls are placeholders: there is no media engine, so
//! they only flip the local play flag or log what they would do.

use super::content::Album;

/// Transport buttons in the detail view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportAction {
    Previous,
    PlayPause,
    Stop,
    Next,
}

/// The selected album and its local playback flag.
///
/// Holds its own copy of the album, so later searches never invalidate it.
#[derive(Clone, Debug)]
pub struct AlbumDetailState {
    pub album: Album,
    pub is_playing: bool,
}

impl AlbumDetailState {
    pub fn new(album: Album) -> Self {
        Self {
            album,
            is_playing: false,
        }
    }

    pub fn apply(&mut self, action: TransportAction) {
        match action {
            TransportAction::Previous => {
                tracing::info!(album_id = self.album.id, "Previous track");
            }
            TransportAction::PlayPause => {
                self.is_playing = !self.is_playing;
                tracing::debug!(album_id = self.album.id, playing = self.is_playing, "Toggled play/pause");
            }
            TransportAction::Stop => {
                self.is_playing = false;
            }
            TransportAction::Next => {
                tracing::info!(album_id = self.album.id, "Next track");
            }
        }
    }
}
