use std::{path::PathBuf, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{load_settings, ArticClient, ArtworkBrowser, ArtworkSource, PageFailure};
use serde::Serialize;
use shared::domain::{Artwork, ArtworkId};
use tracing_subscriber::EnvFilter;

/// Fetch one page of the artwork catalog and print it.
#[derive(Parser, Debug)]
#[command(name = "artworks")]
struct Args {
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Select the first N rows of the page, as the "Select Rows" control does.
    #[arg(long, value_name = "N")]
    select_first: Option<String>,
    #[arg(long)]
    json: bool,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    rows_per_page: Option<u32>,
}

#[derive(Debug, Serialize)]
struct PageReport<'a> {
    page: u32,
    total_pages: Option<u32>,
    total_records: Option<u64>,
    rows: &'a [Artwork],
    selected: Vec<ArtworkId>,
    selection_label: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(url) = args.api_base_url {
        settings.api_base_url = url;
    }
    if let Some(rows) = args.rows_per_page {
        settings.rows_per_page = rows;
    }

    let client = ArticClient::from_settings(&settings)?;
    let mut browser = ArtworkBrowser::from_settings(&settings);
    let now = Instant::now();
    if let Some(page) = browser.go_to_page(args.page, now) {
        let result = client.fetch_page(page).await.map_err(PageFailure::from);
        browser.apply_page(page, result, now);
    }
    if let Some(failure) = browser.error() {
        bail!("failed to load page {}: {}", browser.current_page(), failure.message);
    }

    if let Some(input) = args.select_first.as_deref() {
        let added = browser.select_first_n(input);
        tracing::debug!(input, added, "applied select-first");
    }

    let report = PageReport {
        page: browser.current_page(),
        total_pages: browser.total_pages(),
        total_records: browser.total_records(),
        rows: browser.rows(),
        selected: browser.selection().selected_ids().collect(),
        selection_label: browser.selection_label(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report, &browser);
    }
    Ok(())
}

/// `RUST_LOG` when it parses, `info` otherwise.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn print_table(report: &PageReport<'_>, browser: &ArtworkBrowser) {
    match report.total_pages {
        Some(total) => println!("Page {} of {total}", report.page),
        None => println!("Page {}", report.page),
    }
    for artwork in report.rows {
        let mark = if browser.selection().is_selected(artwork.id) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "{mark} {:>8}  {}  |  {}  |  {}  |  {}-{}",
            artwork.id,
            artwork.title.as_deref().unwrap_or("-"),
            artwork.place_of_origin.as_deref().unwrap_or("-"),
            artwork
                .artist_display
                .as_deref()
                .unwrap_or("-")
                .replace('\n', "; "),
            year(artwork.date_start),
            year(artwork.date_end),
        );
    }
    println!("{}", report.selection_label);
}

fn year(value: Option<i32>) -> String {
    value.map_or_else(|| "?".to_string(), |year| year.to_string())
}
