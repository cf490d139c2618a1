//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{ArtworkSource, PageFailure};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Called after every event pushed to the UI so the window wakes up.
pub type Notify = Arc<dyn Fn() + Send + Sync>;

pub fn launch(
    source: Arc<dyn ArtworkSource>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    notify: Notify,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                notify();
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            notify();

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchPage { page } => {
                        tracing::info!(page, "backend: fetch_page");
                        let source = Arc::clone(&source);
                        let ui_tx = ui_tx.clone();
                        let notify = Arc::clone(&notify);
                        // Requests are not cancelled; the UI decides whether
                        // a late page is still worth showing.
                        tokio::spawn(async move {
                            let event = match source.fetch_page(page).await {
                                Ok(data) => {
                                    tracing::info!(page, rows = data.data.len(), "backend: fetch_page done");
                                    UiEvent::PageLoaded { page, data }
                                }
                                Err(err) => {
                                    tracing::error!(page, "backend: fetch_page failed: {err}");
                                    UiEvent::PageFailed {
                                        page,
                                        failure: PageFailure::from(&err),
                                    }
                                }
                            };
                            deliver(ui_tx, event).await;
                            notify();
                        });
                    }
                    BackendCommand::Shutdown => {
                        tracing::info!("backend: shutdown requested");
                        break;
                    }
                }
            }
        });
    })
}

/// Page results must not be dropped: a lost result would leave its page
/// marked as loading forever. Falls back to a blocking send when full.
async fn deliver(ui_tx: Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) | Err(TrySendError::Disconnected(_)) => {}
        Err(TrySendError::Full(event)) => {
            tracing::warn!("backend->ui event queue is full; waiting for the UI to drain it");
            let _ = tokio::task::spawn_blocking(move || ui_tx.send(event)).await;
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
