use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::catalog::CatalogApi;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::FetchWorker;

const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Run the interactive browser until the user quits.
///
/// Starts on the listing, or on the detail screen when `start` names a
/// product id.
pub fn run(config: &Config, start: Option<u64>, api: Arc<dyn CatalogApi>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("shopfront-fetch")
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let fetch_sender = FetchWorker::spawn(runtime.handle(), api, events.sender());

    let mut app = App::new(fetch_sender, config.ui.toast_duration());
    match start {
        Some(id) => app.open_product(id),
        None => app.open_listing(),
    }
    tracing::info!(?start, base_url = %config.catalog.base_url, "browser started");

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "terminal resized");
            }
            Ok(AppEvent::Fetched(outcome)) => app.on_fetched(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("browser stopped");
    Ok(())
}
