use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use client_core::FetchError;
use crossbeam_channel::bounded;
use shared::{
    domain::{Artwork, ArtworkPage, Pagination},
    error::{ApiError, ErrorCode},
};

use super::*;

struct StubSource;

#[async_trait]
impl ArtworkSource for StubSource {
    async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, FetchError> {
        if page == 13 {
            return Err(FetchError::Status {
                status: 403,
                api: ApiError::new(ErrorCode::Forbidden, "Invalid number of results"),
            });
        }
        let first = i64::from(page - 1) * 10 + 1;
        Ok(ArtworkPage {
            pagination: Pagination {
                total: 100,
                limit: 10,
                offset: u64::from(page - 1) * 10,
                total_pages: 10,
                current_page: page,
            },
            data: (first..first + 10).map(Artwork::with_id).collect(),
        })
    }
}

fn next_page_event(ui_rx: &Receiver<UiEvent>) -> UiEvent {
    loop {
        match ui_rx.recv_timeout(Duration::from_secs(5)).expect("ui event") {
            UiEvent::Info(_) => continue,
            other => return other,
        }
    }
}

#[test]
fn fetch_page_command_produces_page_loaded_event() {
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let wakeups = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&wakeups);
    let handle = launch(
        Arc::new(StubSource),
        cmd_rx,
        ui_tx,
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );

    cmd_tx
        .send(BackendCommand::FetchPage { page: 2 })
        .expect("queue command");
    match next_page_event(&ui_rx) {
        UiEvent::PageLoaded { page, data } => {
            assert_eq!(page, 2);
            assert_eq!(data.data.first().map(|a| a.id.0), Some(11));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(wakeups.load(Ordering::SeqCst) >= 1);

    cmd_tx.send(BackendCommand::Shutdown).expect("queue shutdown");
    handle.join().expect("worker exits");
}

#[test]
fn failed_fetch_produces_page_failed_event() {
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let handle = launch(Arc::new(StubSource), cmd_rx, ui_tx, Arc::new(|| {}));

    cmd_tx
        .send(BackendCommand::FetchPage { page: 13 })
        .expect("queue command");
    match next_page_event(&ui_rx) {
        UiEvent::PageFailed { page, failure } => {
            assert_eq!(page, 13);
            assert_eq!(failure.code, ErrorCode::Forbidden);
            assert!(failure.message.contains("HTTP 403"));
        }
        other => panic!("unexpected event: {other:?}"),
    }

    drop(cmd_tx);
    handle.join().expect("worker exits when UI goes away");
}
