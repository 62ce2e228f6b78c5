//! Main application model with state management

use tokio::sync::Mutex;

use super::content::Album;
use super::detail::{AlbumDetailState, TransportAction};
use super::search::{CommitOutcome, SearchRequestToken, SearchSnapshot, SearchState};
use super::types::{ActiveSection, GridMove, MAX_GRID_COLUMNS, UiState, move_in_grid};

/// Main application model containing all state.
///
/// Each concern sits behind its own lock with a single writer: the input
/// handlers own `ui_state`, the query executor owns `search`, and the
/// detail handlers own `detail`.
pub struct AppModel {
    ui_state: Mutex<UiState>,
    search: Mutex<SearchState>,
    detail: Mutex<Option<AlbumDetailState>>,
    should_quit: Mutex<bool>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            ui_state: Mutex::new(UiState::default()),
            search: Mutex::new(SearchState::new()),
            detail: Mutex::new(None),
            should_quit: Mutex::new(false),
        }
    }

    pub fn with_grid_columns(columns: usize) -> Self {
        Self {
            ui_state: Mutex::new(UiState {
                grid_columns: columns.clamp(1, MAX_GRID_COLUMNS),
                ..UiState::default()
            }),
            ..Self::new()
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    // ========================================================================
    // UI State
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    /// Replace the raw query; returns the new value
    pub async fn update_search_query(&self, query: String) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query = query;
        state.search_query.clone()
    }

    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_query.push(c);
        state.search_query.clone()
    }

    /// Returns `None` when there was nothing to delete
    pub async fn backspace_search(&self) -> Option<String> {
        let mut state = self.ui_state.lock().await;
        state.search_query.pop()?;
        Some(state.search_query.clone())
    }

    pub async fn get_search_query(&self) -> String {
        self.ui_state.lock().await.search_query.clone()
    }

    pub async fn toggle_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = !state.show_help_popup;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn commit_search(&self, query: &str) -> CommitOutcome {
        self.search.lock().await.commit(query)
    }

    /// Apply a response if `token` is still current.
    pub async fn apply_search_results(&self, token: SearchRequestToken, albums: Vec<Album>) -> bool {
        let applied = self.search.lock().await.apply_success(token, albums);
        if applied {
            self.on_search_finished().await;
        }
        applied
    }

    /// Record a failure if `token` is still current.
    pub async fn apply_search_failure(&self, token: SearchRequestToken) -> bool {
        let applied = self.search.lock().await.apply_failure(token);
        if applied {
            self.on_search_finished().await;
        }
        applied
    }

    pub async fn get_search_snapshot(&self) -> SearchSnapshot {
        SearchSnapshot::from(&*self.search.lock().await)
    }

    async fn on_search_finished(&self) {
        let mut state = self.ui_state.lock().await;
        state.grid_selected = 0;
        state.active_section = ActiveSection::Search;
    }

    // ========================================================================
    // Album Grid
    // ========================================================================

    pub async fn move_grid_selection(&self, direction: GridMove) {
        let len = self.search.lock().await.results().len();
        let mut state = self.ui_state.lock().await;
        state.grid_selected = move_in_grid(state.grid_selected, len, state.grid_columns, direction);
    }

    pub async fn get_selected_album(&self) -> Option<Album> {
        let index = self.ui_state.lock().await.grid_selected;
        self.search.lock().await.results().get(index).cloned()
    }

    // ========================================================================
    // Album Detail
    // ========================================================================

    pub async fn open_album_detail(&self, album: Album) {
        tracing::debug!(album_id = album.id, title = %album.title, "Opening album detail");
        *self.detail.lock().await = Some(AlbumDetailState::new(album));
    }

    pub async fn close_album_detail(&self) {
        *self.detail.lock().await = None;
    }

    pub async fn is_album_detail_open(&self) -> bool {
        self.detail.lock().await.is_some()
    }

    pub async fn apply_transport(&self, action: TransportAction) {
        if let Some(detail) = self.detail.lock().await.as_mut() {
            detail.apply(action);
        }
    }

    pub async fn get_album_detail(&self) -> Option<AlbumDetailState> {
        self.detail.lock().await.clone()
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}
