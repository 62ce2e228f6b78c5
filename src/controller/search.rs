//! Query execution: committed queries in, result sets out.

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::model::{CommitOutcome, SearchRequestToken};
use super::AppController;

impl AppController {
    /// Feed a new raw query value into the debouncer.
    pub async fn on_query_input(&self, raw: String) {
        self.debouncer.lock().await.input(raw);
    }

    /// Commit the current raw query without waiting for the quiet period.
    pub async fn flush_query(&self) {
        let raw = self.model.get_search_query().await;
        self.debouncer.lock().await.flush(raw);
    }

    /// Consume committed queries until the debouncer goes away.
    pub fn spawn_commit_loop(&self, mut committed_rx: UnboundedReceiver<String>) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            while let Some(query) = committed_rx.recv().await {
                controller.commit_query(query).await;
            }
            tracing::debug!("Commit loop finished");
        })
    }

    /// React to a committed query: clear, ignore, or start one search.
    pub async fn commit_query(&self, query: String) {
        match self.model.commit_search(&query).await {
            CommitOutcome::Cleared => {
                tracing::debug!("Search cleared");
                self.abort_in_flight().await;
            }
            CommitOutcome::Unchanged => {
                tracing::trace!(query = %query, "Committed query unchanged, no request");
            }
            CommitOutcome::Fetch { token, query } => {
                let controller = self.clone();
                let handle = tokio::spawn(async move {
                    controller.execute_search(token, query).await;
                });
                // The old request is already superseded; aborting only saves the transfer
                if let Some(previous) = self.in_flight.lock().await.replace(handle) {
                    previous.abort();
                }
            }
        }
    }

    async fn execute_search(&self, token: SearchRequestToken, query: String) {
        tracing::debug!(query = %query, %token, "Performing search");

        match self.catalog.search_albums(&query).await {
            Ok(albums) => {
                let count = albums.len();
                if self.model.apply_search_results(token, albums).await {
                    tracing::info!(query = %query, %token, count, "Search completed successfully");
                }
            }
            Err(e) => {
                if self.model.apply_search_failure(token).await {
                    tracing::error!(query = %query, %token, error = %e, "Search failed");
                }
            }
        }
    }

    pub(crate) async fn abort_in_flight(&self) {
        if let Some(handle) = self.in_flight.lock().await.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::controller::{AppController, DEBOUNCE_INTERVAL};
    use crate::error::CatalogError;
    use crate::model::catalog::mocks::MockCatalog;
    use crate::model::{AppModel, LoadingStatus, MAX_RESULTS, SEARCH_FAILED_MESSAGE};

    fn setup(catalog: MockCatalog) -> (AppController, Arc<MockCatalog>, Arc<AppModel>) {
        let model = Arc::new(AppModel::new());
        let catalog = Arc::new(catalog);
        let (controller, rx) = AppController::new(model.clone(), catalog.clone(), DEBOUNCE_INTERVAL);
        controller.spawn_commit_loop(rx);
        (controller, catalog, model)
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            controller
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .await
                .unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_then_pause_issues_one_request() {
        let (controller, catalog, model) = setup(MockCatalog::new().with_albums("queen", 25));

        type_text(&controller, "queen").await;
        settle().await;
        assert!(catalog.calls().is_empty());

        tokio::time::sleep(DEBOUNCE_INTERVAL + Duration::from_millis(10)).await;
        settle().await;

        assert_eq!(catalog.calls(), vec!["queen".to_string()]);
        let snapshot = model.get_search_snapshot().await;
        assert_eq!(snapshot.status, LoadingStatus::Ready);
        assert_eq!(snapshot.results.len(), MAX_RESULTS);
        assert_eq!(snapshot.results[0].title, "queen 0");
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_edit_only_commits_final_value() {
        let (controller, catalog, _model) = setup(MockCatalog::new());

        type_text(&controller, "a").await;
        tokio::time::advance(Duration::from_millis(200)).await;
        type_text(&controller, "b").await;

        tokio::time::sleep(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(catalog.calls(), vec!["ab".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_while_pending_discards_late_response() {
        let (controller, catalog, model) =
            setup(MockCatalog::new().with_albums("queen", 5).gate("queen"));

        controller.commit_query("queen".to_string()).await;
        settle().await;
        assert_eq!(model.get_search_snapshot().await.status, LoadingStatus::Loading);

        controller.commit_query(String::new()).await;
        let snapshot = model.get_search_snapshot().await;
        assert_eq!(snapshot.status, LoadingStatus::Idle);
        assert!(snapshot.results.is_empty());

        catalog.release("queen");
        settle().await;
        let snapshot = model.get_search_snapshot().await;
        assert_eq!(snapshot.status, LoadingStatus::Idle);
        assert!(snapshot.results.is_empty());
        assert_eq!(catalog.calls(), vec!["queen".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_first_response_does_not_replace_second() {
        let (controller, catalog, model) = setup(
            MockCatalog::new()
                .with_albums("queen", 5)
                .gate("queen")
                .with_albums("abba", 2),
        );

        controller.commit_query("queen".to_string()).await;
        settle().await;
        controller.commit_query("abba".to_string()).await;
        settle().await;

        catalog.release("queen");
        settle().await;

        let snapshot = model.get_search_snapshot().await;
        assert_eq!(snapshot.committed_query, "abba");
        assert_eq!(snapshot.results.len(), 2);
        assert!(snapshot.results.iter().all(|a| a.title.starts_with("abba")));
        assert_eq!(snapshot.status, LoadingStatus::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_query_twice_issues_one_request() {
        let (controller, catalog, _model) = setup(MockCatalog::new().with_albums("queen", 3));

        controller.commit_query("queen".to_string()).await;
        settle().await;
        controller.commit_query("queen".to_string()).await;
        settle().await;

        assert_eq!(catalog.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_success_is_ready() {
        let (controller, _catalog, model) = setup(MockCatalog::new());

        controller.commit_query("xyz123nonexistent".to_string()).await;
        settle().await;

        let snapshot = model.get_search_snapshot().await;
        assert_eq!(snapshot.status, LoadingStatus::Ready);
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_network_error_sets_failed() {
        let (controller, _catalog, model) = setup(
            MockCatalog::new().with_error("queen", CatalogError::Network("connection reset".to_string())),
        );

        controller.commit_query("queen".to_string()).await;
        settle().await;

        let snapshot = model.get_search_snapshot().await;
        assert_eq!(
            snapshot.status,
            LoadingStatus::Failed(SEARCH_FAILED_MESSAGE.to_string())
        );
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_query_after_failure_retries() {
        let (controller, catalog, _model) = setup(
            MockCatalog::new().with_error(
                "queen",
                CatalogError::Status { status: 500, reason: "Internal Server Error".to_string() },
            ),
        );

        controller.commit_query("queen".to_string()).await;
        settle().await;
        controller.commit_query("queen".to_string()).await;
        settle().await;

        assert_eq!(catalog.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_flushes_debounce() {
        let (controller, catalog, model) = setup(MockCatalog::new().with_albums("abba", 4));

        type_text(&controller, "abba").await;
        controller
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .await
            .unwrap();
        settle().await;

        assert_eq!(catalog.calls(), vec!["abba".to_string()]);
        assert_eq!(model.get_search_snapshot().await.results.len(), 4);

        tokio::time::sleep(Duration::from_secs(2)).await;
        settle().await;
        assert_eq!(catalog.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_commit() {
        let (controller, catalog, _model) = setup(MockCatalog::new());

        type_text(&controller, "queen").await;
        controller.shutdown().await;

        tokio::time::sleep(Duration::from_secs(2)).await;
        settle().await;
        assert!(catalog.calls().is_empty());
    }
}
