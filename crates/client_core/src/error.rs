use shared::error::{ApiError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid page {0}; pages start at 1")]
    InvalidPage(u32),
    #[error("request to artwork catalog failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("artwork catalog returned HTTP {status}: {}", .api.message)]
    Status { status: u16, api: ApiError },
    #[error("malformed artwork catalog response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidPage(_) => ErrorCode::Validation,
            Self::Status { api, .. } => api.code,
            Self::Transport(_) | Self::Decode(_) => ErrorCode::Unknown,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid api_base_url '{value}': {source}")]
    BaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
