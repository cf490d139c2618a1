//! Artwork catalog client and the state behind the artwork grid.

pub mod api;
pub mod browser;
pub mod error;
pub mod page_cache;
pub mod selection;
pub mod settings;

pub use api::{ArticClient, ArtworkSource};
pub use browser::ArtworkBrowser;
pub use error::{FetchError, SettingsError};
pub use page_cache::{FetchDecision, PageCache, PageFailure};
pub use selection::{parse_row_count, SelectionStore};
pub use settings::{load_settings, Settings};
