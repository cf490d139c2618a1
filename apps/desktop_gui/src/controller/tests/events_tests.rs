use super::*;

fn failure(code: ErrorCode, message: &str, timed_out: bool) -> PageFailure {
    PageFailure {
        code,
        message: message.to_string(),
        timed_out,
    }
}

#[test]
fn backend_startup_failures_are_never_retryable() {
    let disconnected = UiError::from_message(
        UiErrorContext::BackendStartup,
        "Backend command processor disconnected (possible startup/runtime failure)",
    );
    assert_eq!(disconnected.category(), UiErrorCategory::Transport);
    assert!(!disconnected.is_retryable());

    let runtime = UiError::from_message(
        UiErrorContext::BackendStartup,
        "backend worker startup failure: failed to build runtime: out of threads",
    );
    assert_eq!(runtime.category(), UiErrorCategory::Unknown);
    assert!(!runtime.is_retryable());
}

#[test]
fn classifies_connection_refused_page_failure_as_transport() {
    let err = UiError::from_page_failure(&failure(
        ErrorCode::Unknown,
        "request to artwork catalog failed: error sending request: connection refused",
        false,
    ));
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(err.context(), UiErrorContext::FetchPage);
    assert!(err.is_retryable());
}

#[test]
fn classifies_malformed_body_as_decode_and_not_retryable() {
    let err = UiError::from_page_failure(&failure(
        ErrorCode::Unknown,
        "malformed artwork catalog response: expected value at line 1 column 1",
        false,
    ));
    assert_eq!(err.category(), UiErrorCategory::Decode);
    assert!(!err.is_retryable());
}

#[test]
fn status_failures_are_rejections_and_only_server_side_ones_retry() {
    let forbidden = UiError::from_page_failure(&failure(
        ErrorCode::Forbidden,
        "artwork catalog returned HTTP 403: Invalid number of results",
        false,
    ));
    assert_eq!(forbidden.category(), UiErrorCategory::Rejected);
    assert!(!forbidden.is_retryable());

    let unavailable = UiError::from_page_failure(&failure(
        ErrorCode::Internal,
        "artwork catalog returned HTTP 503: Service Unavailable",
        false,
    ));
    assert_eq!(unavailable.category(), UiErrorCategory::Rejected);
    assert!(unavailable.is_retryable());
}

#[test]
fn retryability_follows_error_code_not_message_text() {
    let throttled = UiError::from_page_failure(&failure(
        ErrorCode::RateLimited,
        "slow down",
        false,
    ));
    assert_eq!(throttled.category(), UiErrorCategory::Rejected);
    assert!(throttled.is_retryable());

    let not_found = UiError::from_page_failure(&failure(
        ErrorCode::NotFound,
        "artwork catalog returned HTTP 404: upstream said HTTP 503",
        false,
    ));
    assert_eq!(not_found.category(), UiErrorCategory::Rejected);
    assert!(!not_found.is_retryable());
}

#[test]
fn timeouts_win_over_error_code() {
    let err = UiError::from_page_failure(&failure(ErrorCode::Unknown, "operation timed out", true));
    assert_eq!(err.category(), UiErrorCategory::Transport);
    assert_eq!(
        err.summary(),
        "Could not load artworks (network): operation timed out"
    );
}
