//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, GridMove, TransportAction};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Handle album detail modal first (blocks all other interactions)
        if model.is_album_detail_open().await {
            let action = match key.code {
                KeyCode::Char(' ') => Some(TransportAction::PlayPause),
                KeyCode::Char('s') | KeyCode::Char('S') => Some(TransportAction::Stop),
                KeyCode::Char('p') | KeyCode::Char('P') => Some(TransportAction::Previous),
                KeyCode::Char('n') | KeyCode::Char('N') => Some(TransportAction::Next),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                    model.close_album_detail().await;
                    None
                }
                _ => None,
            };
            if let Some(action) = action {
                model.apply_transport(action).await;
            }
            return Ok(());
        }

        // Handle help popup
        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        // Handle search input when in search section
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab | KeyCode::Down => {
                    model.set_active_section(ActiveSection::Results).await;
                }
                KeyCode::Enter => {
                    self.flush_query().await;
                }
                KeyCode::Esc => {
                    if !ui_state.search_query.is_empty() {
                        let raw = model.update_search_query(String::new()).await;
                        self.on_query_input(raw).await;
                    }
                }
                KeyCode::Backspace => {
                    if let Some(raw) = model.backspace_search().await {
                        self.on_query_input(raw).await;
                    }
                }
                KeyCode::Char(c) => {
                    let raw = model.append_to_search(c).await;
                    self.on_query_input(raw).await;
                }
                _ => {}
            }
            return Ok(());
        }

        // Results grid
        match key.code {
            KeyCode::Up => model.move_grid_selection(GridMove::Up).await,
            KeyCode::Down => model.move_grid_selection(GridMove::Down).await,
            KeyCode::Left => model.move_grid_selection(GridMove::Left).await,
            KeyCode::Right => model.move_grid_selection(GridMove::Right).await,
            KeyCode::Enter => {
                if let Some(album) = model.get_selected_album().await {
                    model.open_album_detail(album).await;
                }
            }
            KeyCode::Tab | KeyCode::BackTab => model.cycle_section().await,
            KeyCode::Esc | KeyCode::Char('/') => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Char('?') => model.toggle_help_popup().await,
            KeyCode::Char('q') | KeyCode::Char('Q') => model.set_should_quit(true).await,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use crate::controller::{AppController, DEBOUNCE_INTERVAL};
    use crate::model::catalog::mocks::MockCatalog;
    use crate::model::{ActiveSection, AppModel, CommitOutcome, sample_album};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn controller_with_results(count: usize) -> (AppController, Arc<AppModel>) {
        let model = Arc::new(AppModel::with_grid_columns(4));
        let catalog = Arc::new(MockCatalog::new());
        let (controller, _rx) = AppController::new(model.clone(), catalog, DEBOUNCE_INTERVAL);

        if let CommitOutcome::Fetch { token, .. } = model.commit_search("queen").await {
            let albums = (0..count as u64).map(|i| sample_album(i, "Album")).collect();
            model.apply_search_results(token, albums).await;
        }
        (controller, model)
    }

    #[tokio::test]
    async fn test_release_events_ignored() {
        let (controller, model) = controller_with_results(0).await;
        let mut key = press(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        controller.handle_key_event(key).await.unwrap();
        assert!(model.get_search_query().await.is_empty());
    }

    #[tokio::test]
    async fn test_typing_edits_raw_query() {
        let (controller, model) = controller_with_results(0).await;
        for code in [KeyCode::Char('q'), KeyCode::Char('u'), KeyCode::Backspace] {
            controller.handle_key_event(press(code)).await.unwrap();
        }
        assert_eq!(model.get_search_query().await, "q");
        // 'q' types in the search box instead of quitting
        assert!(!model.should_quit().await);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(model.get_search_query().await.is_empty());
    }

    #[tokio::test]
    async fn test_open_detail_and_transport() {
        let (controller, model) = controller_with_results(6).await;

        controller.handle_key_event(press(KeyCode::Tab)).await.unwrap();
        assert_eq!(model.get_ui_state().await.active_section, ActiveSection::Results);

        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        let detail = model.get_album_detail().await.unwrap();
        assert_eq!(detail.album.id, 1);
        assert!(!detail.is_playing);

        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();
        assert!(model.get_album_detail().await.unwrap().is_playing);

        controller.handle_key_event(press(KeyCode::Char('s'))).await.unwrap();
        assert!(!model.get_album_detail().await.unwrap().is_playing);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!model.is_album_detail_open().await);
        // Esc closed only the modal
        assert_eq!(model.get_ui_state().await.active_section, ActiveSection::Results);
    }

    #[tokio::test]
    async fn test_enter_on_empty_grid_opens_nothing() {
        let (controller, model) = controller_with_results(0).await;
        model.set_active_section(ActiveSection::Results).await;
        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();
        assert!(!model.is_album_detail_open().await);
    }

    #[tokio::test]
    async fn test_help_popup_blocks_grid_keys() {
        let (controller, model) = controller_with_results(6).await;
        model.set_active_section(ActiveSection::Results).await;

        controller.handle_key_event(press(KeyCode::Char('?'))).await.unwrap();
        assert!(model.is_help_popup_open().await);

        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        assert_eq!(model.get_ui_state().await.grid_selected, 0);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!model.is_help_popup_open().await);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (controller, model) = controller_with_results(0).await;
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(model.should_quit().await);

        let (controller, model) = controller_with_results(0).await;
        model.set_active_section(ActiveSection::Results).await;
        controller.handle_key_event(press(KeyCode::Char('q'))).await.unwrap();
        assert!(model.should_quit().await);
    }
}
