use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use url::Url;

use crate::error::SettingsError;

pub const DEFAULT_SETTINGS_FILE: &str = "artworks.toml";
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";
pub const DEFAULT_ROWS_PER_PAGE: u32 = 10;
/// The catalog rejects `limit` above this value.
pub const MAX_ROWS_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub rows_per_page: u32,
    pub request_timeout_secs: u64,
    pub stale_after_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            request_timeout_secs: 30,
            stale_after_secs: None,
            user_agent: concat!("artworks-browser/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Settings {
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| SettingsError::BaseUrl {
            value: self.api_base_url.clone(),
            source,
        })
    }

    pub fn rows_per_page(&self) -> u32 {
        self.rows_per_page.clamp(1, MAX_ROWS_PER_PAGE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn stale_after(&self) -> Option<Duration> {
        self.stale_after_secs.map(Duration::from_secs)
    }
}

/// Defaults, then the settings file, then environment overrides.
///
/// An explicitly requested file must exist; the default `artworks.toml` is
/// optional.
pub fn load_settings(explicit_path: Option<&Path>) -> Result<Settings, SettingsError> {
    load_settings_with_env(explicit_path, |name| std::env::var(name).ok())
}

pub(crate) fn load_settings_with_env(
    explicit_path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Settings, SettingsError> {
    let path = explicit_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

    let mut settings = match fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw, &path)?,
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit_path.is_none() => {
            Settings::default()
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.display().to_string(),
                source,
            })
        }
    };

    apply_env_overrides(&mut settings, lookup);
    settings.base_url()?;
    Ok(settings)
}

fn parse_settings(raw: &str, path: &Path) -> Result<Settings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse {
        path: path.display().to_string(),
        source,
    })
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = read("ARTWORKS_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = read("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = read("APP__USER_AGENT") {
        settings.user_agent = v;
    }

    if let Some(v) = read("APP__ROWS_PER_PAGE") {
        match v.trim().parse::<u32>() {
            Ok(parsed) => settings.rows_per_page = parsed,
            Err(err) => tracing::warn!(value = %v, "ignoring APP__ROWS_PER_PAGE: {err}"),
        }
    }
    if let Some(v) = read("APP__REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(err) => tracing::warn!(value = %v, "ignoring APP__REQUEST_TIMEOUT_SECS: {err}"),
        }
    }
    if let Some(v) = read("APP__STALE_AFTER_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.stale_after_secs = Some(parsed),
            Err(err) => tracing::warn!(value = %v, "ignoring APP__STALE_AFTER_SECS: {err}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
