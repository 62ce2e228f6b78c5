//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! turns raw queries into committed searches, and coordinates between the
//! model and the catalog client.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `debounce`: Quiet-period debouncing of the raw query
//! - `search`: Query execution and supersession of stale responses

mod input;
mod debounce;
mod search;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;

use crate::model::{AppModel, CatalogApi};

pub use debounce::{DEBOUNCE_INTERVAL, Debouncer};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    catalog: Arc<dyn CatalogApi>,
    debouncer: Arc<Mutex<Debouncer<String>>>,
    in_flight: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AppController {
    /// Build a controller and the receiving end of its committed-query channel.
    ///
    /// Pass the receiver to [`AppController::spawn_commit_loop`].
    pub fn new(
        model: Arc<AppModel>,
        catalog: Arc<dyn CatalogApi>,
        debounce_interval: Duration,
    ) -> (Self, UnboundedReceiver<String>) {
        let (committed_tx, committed_rx) = mpsc::unbounded_channel();
        let controller = Self {
            model,
            catalog,
            debouncer: Arc::new(Mutex::new(Debouncer::new(debounce_interval, committed_tx))),
            in_flight: Arc::new(Mutex::new(None)),
        };
        (controller, committed_rx)
    }

    /// Stop pending timers and in-flight searches before exit
    pub async fn shutdown(&self) {
        let mut debouncer = self.debouncer.lock().await;
        if debouncer.has_pending() {
            tracing::debug!("Dropping uncommitted query on shutdown");
        }
        debouncer.cancel();
        drop(debouncer);
        self.abort_in_flight().await;
    }
}
