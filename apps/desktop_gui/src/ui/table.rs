//! Artwork grid: a checkbox column followed by the record fields.

use client_core::ArtworkBrowser;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::controller::reducer::UiAction;

const ROW_HEIGHT: f32 = 26.0;
const HEADER_HEIGHT: f32 = 28.0;
const COLUMN_TITLES: [&str; 6] = [
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Start Date",
    "End Date",
];

pub fn artwork_table(ui: &mut egui::Ui, browser: &ArtworkBrowser, actions: &mut Vec<UiAction>) {
    let rows = browser.rows();
    let selection = browser.selection();
    // Rows of the previous page stay visible while the next one loads, but
    // they should not invite interaction.
    let interactive = !browser.is_showing_stale();

    TableBuilder::new(ui)
        .id_salt("artwork_table")
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::exact(32.0))
        .column(Column::initial(240.0).at_least(120.0).clip(true))
        .column(Column::initial(130.0).at_least(80.0).clip(true))
        .column(Column::initial(240.0).at_least(120.0).clip(true))
        .column(Column::initial(200.0).at_least(100.0).clip(true))
        .column(Column::initial(80.0).at_least(60.0))
        .column(Column::remainder().at_least(60.0))
        .min_scrolled_height(0.0)
        .header(HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                let mut checked = browser.select_all_checked();
                let response = ui
                    .add_enabled(
                        interactive && !rows.is_empty(),
                        egui::Checkbox::without_text(&mut checked),
                    )
                    .on_hover_text("Select or deselect every row on this page");
                if response.changed() {
                    actions.push(UiAction::ToggleAllOnPage);
                }
            });
            for title in COLUMN_TITLES {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let artwork = &rows[row.index()];
                let selected = selection.is_selected(artwork.id);
                row.set_selected(selected);

                row.col(|ui| {
                    let mut checked = selected;
                    if ui
                        .add_enabled(interactive, egui::Checkbox::without_text(&mut checked))
                        .changed()
                    {
                        actions.push(UiAction::ToggleRow(artwork.id));
                    }
                });
                row.col(|ui| {
                    ui.label(display_text(artwork.title.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_text(artwork.place_of_origin.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_text(artwork.artist_display.as_deref()))
                        .on_hover_text(artwork.artist_display.as_deref().unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(display_text(artwork.inscriptions.as_deref()));
                });
                row.col(|ui| {
                    ui.label(display_year(artwork.date_start));
                });
                row.col(|ui| {
                    ui.label(display_year(artwork.date_end));
                });
            });
        });
}

/// Single-line cell text; the API uses embedded newlines in artist strings.
pub fn display_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("; "),
        _ => "-".to_string(),
    }
}

pub fn display_year(value: Option<i32>) -> String {
    match value {
        Some(year) if year < 0 => format!("{} BCE", -i64::from(year)),
        Some(year) => year.to_string(),
        None => "-".to_string(),
    }
}
