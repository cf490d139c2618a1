//! Backend-to-UI events and error modeling for the desktop controller.

use client_core::PageFailure;
use shared::{domain::ArtworkPage, error::ErrorCode};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    PageLoaded { page: u32, data: ArtworkPage },
    PageFailed { page: u32, failure: PageFailure },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Rejected,
    Decode,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    FetchPage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    code: Option<ErrorCode>,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("malformed")
            || message_lower.contains("decode")
            || message_lower.contains("expected value")
        {
            UiErrorCategory::Decode
        } else if message_lower.contains("returned http")
            || message_lower.contains("forbidden")
            || message_lower.contains("too many")
        {
            UiErrorCategory::Rejected
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("network")
            || message_lower.contains("request to artwork catalog failed")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            code: None,
            message,
        }
    }

    pub fn from_page_failure(failure: &PageFailure) -> Self {
        let category = if failure.timed_out {
            UiErrorCategory::Transport
        } else {
            match failure.code {
                ErrorCode::Forbidden
                | ErrorCode::NotFound
                | ErrorCode::Validation
                | ErrorCode::RateLimited
                | ErrorCode::Internal => UiErrorCategory::Rejected,
                ErrorCode::Unknown => {
                    Self::from_message(UiErrorContext::FetchPage, failure.message.as_str())
                        .category
                }
            }
        };
        Self {
            category,
            context: UiErrorContext::FetchPage,
            code: Some(failure.code),
            message: failure.message.clone(),
        }
    }

    /// Whether pressing Retry has a realistic chance of helping. Startup
    /// failures never are: the worker that would serve the retry is gone.
    pub fn is_retryable(&self) -> bool {
        if self.context == UiErrorContext::BackendStartup {
            return false;
        }
        match self.category {
            UiErrorCategory::Transport | UiErrorCategory::Unknown => true,
            UiErrorCategory::Rejected => matches!(
                self.code,
                Some(ErrorCode::Internal | ErrorCode::RateLimited)
            ),
            UiErrorCategory::Decode => false,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn summary(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Backend startup failed",
            UiErrorContext::FetchPage => "Could not load artworks",
        };
        format!("{what} ({}): {}", err_label(self.category), self.message)
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "network",
        UiErrorCategory::Rejected => "rejected by catalog",
        UiErrorCategory::Decode => "unreadable response",
        UiErrorCategory::Unknown => "unexpected",
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
