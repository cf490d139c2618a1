//! State transitions of the artwork view.
//!
//! `apply_action` handles what the user did, `apply_event` handles what the
//! backend reported. Both run on the UI thread and never block; actions that
//! need the network hand back the command to queue.

use std::time::Instant;

use client_core::{ArtworkBrowser, PageFailure};
use shared::{domain::ArtworkId, error::ErrorCode};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    GoToPage(u32),
    NextPage,
    PreviousPage,
    Retry,
    ToggleRow(ArtworkId),
    ToggleAllOnPage,
    SelectFirstRows,
    ClearSelection,
}

pub struct ViewState {
    pub browser: ArtworkBrowser,
    /// Text of the "number of rows" input, kept verbatim.
    pub row_count_input: String,
    pub status: String,
    /// Errors that are not tied to a page, e.g. backend startup.
    pub banner: Option<UiError>,
}

impl ViewState {
    pub fn new(browser: ArtworkBrowser) -> Self {
        Self {
            browser,
            row_count_input: String::new(),
            status: "Starting...".to_string(),
            banner: None,
        }
    }

    /// Error to show above the grid: a standing banner first, then the
    /// failure of the current page if it has nothing to display.
    pub fn visible_error(&self) -> Option<UiError> {
        self.banner
            .clone()
            .or_else(|| self.browser.error().map(UiError::from_page_failure))
    }
}

pub fn apply_action(state: &mut ViewState, action: UiAction, now: Instant) -> Option<BackendCommand> {
    let browser = &mut state.browser;
    let fetch = match action {
        UiAction::GoToPage(page) => browser.go_to_page(page, now),
        UiAction::NextPage => browser.next_page(now),
        UiAction::PreviousPage => browser.previous_page(now),
        UiAction::Retry => browser.retry(now),
        UiAction::ToggleRow(id) => {
            browser.toggle_row(id);
            None
        }
        UiAction::ToggleAllOnPage => {
            browser.toggle_select_all();
            None
        }
        UiAction::SelectFirstRows => {
            let added = browser.select_first_n(&state.row_count_input);
            tracing::debug!(input = %state.row_count_input, added, "select first rows");
            None
        }
        UiAction::ClearSelection => {
            browser.clear_selection();
            None
        }
    };

    if let Some(page) = fetch {
        state.status = format!("Loading page {page}...");
        return Some(BackendCommand::FetchPage { page });
    }
    if !browser.is_loading() {
        state.status = page_status(browser);
    }
    None
}

/// Rolls back a fetch that never reached the backend, so its page does not
/// stay in the loading state.
pub fn command_not_sent(state: &mut ViewState, cmd: BackendCommand, now: Instant) {
    if let BackendCommand::FetchPage { page } = cmd {
        let failure = PageFailure {
            code: ErrorCode::Unknown,
            message: state.status.clone(),
            timed_out: false,
        };
        state.browser.apply_page(page, Err(failure), now);
    }
}

pub fn apply_event(state: &mut ViewState, event: UiEvent, now: Instant) {
    match event {
        UiEvent::Info(message) => {
            tracing::info!("{message}");
            if !state.browser.is_loading() {
                state.status = message;
            }
        }
        UiEvent::PageLoaded { page, data } => {
            let rows = data.data.len();
            if state.browser.apply_page(page, Ok(data), now) {
                state.status = page_status(&state.browser);
            } else {
                tracing::debug!(page, rows, "cached page that is no longer displayed");
            }
        }
        UiEvent::PageFailed { page, failure } => {
            if state.browser.apply_page(page, Err(failure), now) {
                state.status = format!("Failed to load page {page}");
            } else {
                tracing::debug!(page, "ignoring failure of a page that is no longer displayed");
            }
        }
        UiEvent::Error(err) => {
            tracing::error!("{}", err.summary());
            state.status = err.summary();
            state.banner = Some(err);
        }
    }
}

fn page_status(browser: &ArtworkBrowser) -> String {
    match (browser.total_pages(), browser.total_records()) {
        (Some(pages), Some(total)) => format!(
            "Page {} of {pages} ({total} artworks)",
            browser.current_page()
        ),
        _ => format!("Page {}", browser.current_page()),
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
