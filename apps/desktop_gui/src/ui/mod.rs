//! UI layer for desktop GUI: app shell, artwork table, and control widgets.

pub mod app;
pub mod table;
pub mod widgets;

pub use app::ArtworksApp;
