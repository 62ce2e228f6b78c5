//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, popup placement)
//! - `layout`: Top bar with search input and status, footer hints
//! - `content`: Status messages and the album grid
//! - `overlays`: Modal overlays (album detail, help)

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{AlbumDetailState, SearchSnapshot, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        search: &SearchSnapshot,
        detail: Option<&AlbumDetailState>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + status
                Constraint::Min(0),    // Album grid
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state, search);
        content::render_main_content(frame, chunks[1], ui_state, search);
        layout::render_footer(frame, chunks[2], ui_state);

        if let Some(detail) = detail {
            overlays::render_album_detail(frame, detail);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    use crate::model::{LoadingStatus, SEARCH_FAILED_MESSAGE, sample_album};

    fn render_to_string(ui_state: &UiState, search: &SearchSnapshot, detail: Option<&AlbumDetailState>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| AppView::render(f, ui_state, search, detail))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn snapshot(status: LoadingStatus, count: usize) -> SearchSnapshot {
        SearchSnapshot {
            committed_query: "queen".to_string(),
            results: (0..count as u64).map(|i| sample_album(i, &format!("Album {}", i))).collect(),
            status,
        }
    }

    #[test]
    fn test_idle_prompt() {
        let screen = render_to_string(&UiState::default(), &SearchSnapshot::default(), None);
        assert!(screen.contains("Type to search for albums..."));
    }

    #[test]
    fn test_very_long_query_keeps_cursor_in_box() {
        let ui_state = UiState {
            search_query: "a".repeat(70_000),
            ..UiState::default()
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| AppView::render(f, &ui_state, &SearchSnapshot::default(), None))
            .unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x < 100);
    }

    #[test]
    fn test_loading_message() {
        let screen = render_to_string(&UiState::default(), &snapshot(LoadingStatus::Loading, 0), None);
        assert!(screen.contains("Loading albums..."));
    }

    #[test]
    fn test_empty_ready_differs_from_failed() {
        let empty = render_to_string(&UiState::default(), &snapshot(LoadingStatus::Ready, 0), None);
        assert!(empty.contains("No albums found."));
        assert!(!empty.contains(SEARCH_FAILED_MESSAGE));

        let failed = render_to_string(
            &UiState::default(),
            &snapshot(LoadingStatus::Failed(SEARCH_FAILED_MESSAGE.to_string()), 0),
            None,
        );
        assert!(failed.contains(SEARCH_FAILED_MESSAGE));
        assert!(!failed.contains("No albums found."));
    }

    #[test]
    fn test_grid_shows_cards() {
        let screen = render_to_string(&UiState::default(), &snapshot(LoadingStatus::Ready, 3), None);
        assert!(screen.contains("Album 0"));
        assert!(screen.contains("Album 2"));
        assert!(screen.contains("3 albums"));
    }

    #[test]
    fn test_detail_modal_shows_album() {
        let mut detail = AlbumDetailState::new(sample_album(5, "Innuendo"));
        detail.album.release_date = Some("1991-02-04".to_string());
        let screen = render_to_string(
            &UiState::default(),
            &snapshot(LoadingStatus::Ready, 1),
            Some(&detail),
        );
        assert!(screen.contains("Innuendo"));
        assert!(screen.contains("February 4, 1991"));
        assert!(screen.contains("12 tracks"));
    }
}
