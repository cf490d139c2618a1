use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, ArticClient, ArtworkBrowser, ArtworkSource};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{app::StartupConfig, ArtworksApp};

#[derive(Parser, Debug)]
#[command(name = "artworks-gui", about = "Browse the Art Institute of Chicago catalog")]
struct Args {
    /// Settings file; defaults to ./artworks.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    rows_per_page: Option<u32>,
    #[arg(long, default_value_t = 1)]
    page: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    if let Some(rows) = args.rows_per_page {
        settings.rows_per_page = rows;
    }
    let source: Arc<dyn ArtworkSource> = Arc::new(ArticClient::from_settings(&settings)?);
    tracing::info!(
        api = %settings.api_base_url,
        rows_per_page = settings.rows_per_page(),
        "starting artworks desktop GUI"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    let browser = ArtworkBrowser::from_settings(&settings);
    let startup = StartupConfig {
        api_base_url: settings.api_base_url.clone(),
        start_page: args.page,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Artworks")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Artworks",
        options,
        Box::new(move |cc| {
            let egui_ctx = cc.egui_ctx.clone();
            backend_bridge::runtime::launch(
                source,
                cmd_rx,
                ui_tx,
                Arc::new(move || egui_ctx.request_repaint()),
            );
            Ok(Box::new(ArtworksApp::bootstrap(cmd_tx, ui_rx, browser, startup)))
        }),
    )
    .map_err(|err| anyhow!("desktop GUI exited with an error: {err}"))
}
