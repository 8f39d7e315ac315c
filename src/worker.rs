//! Fetch execution.
//!
//! Screens never call the catalog themselves: their reducers emit
//! `FetchCommand`s, the worker runs them on tokio and hands back a
//! `FetchOutcome` carrying the same generation tag. Nothing is cancelled;
//! the screens drop outcomes whose generation they no longer expect.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::catalog::{CatalogApi, CatalogError, Product};
use crate::ui::app::App;
use crate::ui::events::AppEvent;

const FETCH_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    All { generation: u64 },
    Category { category: String, generation: u64 },
    Product { id: u64, generation: u64 },
}

#[derive(Debug)]
pub enum FetchOutcome {
    All {
        generation: u64,
        result: Result<Vec<Product>, CatalogError>,
    },
    Category {
        category: String,
        generation: u64,
        result: Result<Vec<Product>, CatalogError>,
    },
    Product {
        id: u64,
        generation: u64,
        result: Result<Product, CatalogError>,
    },
}

impl FetchCommand {
    /// Outcome for a command that could not be executed at all.
    pub fn fail(self, error: CatalogError) -> FetchOutcome {
        match self {
            FetchCommand::All { generation } => FetchOutcome::All {
                generation,
                result: Err(error),
            },
            FetchCommand::Category {
                category,
                generation,
            } => FetchOutcome::Category {
                category,
                generation,
                result: Err(error),
            },
            FetchCommand::Product { id, generation } => FetchOutcome::Product {
                id,
                generation,
                result: Err(error),
            },
        }
    }
}

impl FetchOutcome {
    pub fn is_ok(&self) -> bool {
        match self {
            FetchOutcome::All { result, .. } | FetchOutcome::Category { result, .. } => {
                result.is_ok()
            }
            FetchOutcome::Product { result, .. } => result.is_ok(),
        }
    }
}

pub type FetchSender = mpsc::Sender<FetchCommand>;
pub type FetchReceiver = mpsc::Receiver<FetchCommand>;

/// Bounded command channel between the app and whoever executes fetches.
pub fn fetch_channel() -> (FetchSender, FetchReceiver) {
    mpsc::channel(FETCH_BUFFER)
}

/// Perform one catalog call.
pub async fn execute(api: &dyn CatalogApi, command: FetchCommand) -> FetchOutcome {
    let started = Instant::now();
    let outcome = match command {
        FetchCommand::All { generation } => FetchOutcome::All {
            generation,
            result: api.fetch_all().await,
        },
        FetchCommand::Category {
            category,
            generation,
        } => {
            let result = api.fetch_by_category(&category).await;
            FetchOutcome::Category {
                category,
                generation,
                result,
            }
        }
        FetchCommand::Product { id, generation } => FetchOutcome::Product {
            id,
            generation,
            result: api.fetch_one(id).await,
        },
    };
    tracing::info!(
        ok = outcome.is_ok(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fetch finished"
    );
    outcome
}

/// Execute every queued command inline, feeding outcomes back into `app`,
/// until the app stops issuing new ones.
pub async fn drain(app: &mut App, api: &dyn CatalogApi, commands: &mut FetchReceiver) {
    while let Ok(command) = commands.try_recv() {
        let outcome = execute(api, command).await;
        app.on_fetched(outcome);
    }
}

pub struct FetchWorker;

impl FetchWorker {
    /// Spawn the worker loop on `handle`.
    ///
    /// Each command gets its own task, so a slow request never delays a
    /// newer one. Outcomes are posted to the UI event channel.
    pub fn spawn(
        handle: &Handle,
        api: Arc<dyn CatalogApi>,
        events: std_mpsc::Sender<AppEvent>,
    ) -> FetchSender {
        let (sender, mut receiver) = fetch_channel();
        let task_handle = handle.clone();
        handle.spawn(async move {
            while let Some(command) = receiver.recv().await {
                tracing::debug!(?command, "fetch dispatched");
                let api = Arc::clone(&api);
                let events = events.clone();
                task_handle.spawn(async move {
                    let outcome = execute(api.as_ref(), command).await;
                    if events.send(AppEvent::Fetched(outcome)).is_err() {
                        tracing::trace!("fetch outcome dropped (event loop gone)");
                    }
                });
            }
            tracing::debug!("fetch worker stopped");
        });
        sender
    }
}
