use std::ops::RangeInclusive;

use client_core::ArtworkBrowser;
use eframe::egui;

use crate::controller::{events::UiError, reducer::UiAction};

const PAGE_BUTTONS: u32 = 5;
const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(92, 28, 34);
const ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(214, 76, 86);

/// "Selected Rows" box: count label, Clear Selection, and the first-N input.
pub fn selection_panel(
    ui: &mut egui::Ui,
    browser: &ArtworkBrowser,
    row_count_input: &mut String,
    actions: &mut Vec<UiAction>,
) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.heading("Selected Rows");
            ui.label(browser.selection_label());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(
                        !browser.selection().is_empty(),
                        egui::Button::new("Clear Selection"),
                    )
                    .clicked()
                {
                    actions.push(UiAction::ClearSelection);
                }

                ui.separator();
                let input = ui.add(
                    egui::TextEdit::singleline(row_count_input)
                        .hint_text("Number of rows")
                        .desired_width(120.0),
                );
                let can_select = !browser.rows().is_empty() && !browser.is_showing_stale();
                let submitted =
                    input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui
                    .add_enabled(can_select, egui::Button::new("Select Rows"))
                    .clicked()
                    || (can_select && submitted)
                {
                    actions.push(UiAction::SelectFirstRows);
                }
            });
        });
}

pub fn error_banner(ui: &mut egui::Ui, error: &UiError, actions: &mut Vec<UiAction>) {
    egui::Frame::new()
        .fill(ERROR_FILL)
        .stroke(egui::Stroke::new(1.0, ERROR_STROKE))
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.colored_label(egui::Color32::WHITE, error.summary());
                if error.is_retryable() && ui.button("Retry").clicked() {
                    actions.push(UiAction::Retry);
                }
            });
        });
}

pub fn paginator(ui: &mut egui::Ui, browser: &ArtworkBrowser, actions: &mut Vec<UiAction>) {
    let current = browser.current_page();
    let total = browser.total_pages();

    ui.horizontal(|ui| {
        let at_start = current <= 1;
        let at_end = total.is_some_and(|total| current >= total);

        if ui.add_enabled(!at_start, egui::Button::new("«")).clicked() {
            actions.push(UiAction::GoToPage(1));
        }
        if ui.add_enabled(!at_start, egui::Button::new("‹")).clicked() {
            actions.push(UiAction::PreviousPage);
        }

        for page in page_window(current, total, PAGE_BUTTONS) {
            if ui
                .add(egui::Button::new(page.to_string()).selected(page == current))
                .clicked()
                && page != current
            {
                actions.push(UiAction::GoToPage(page));
            }
        }

        if ui.add_enabled(!at_end, egui::Button::new("›")).clicked() {
            actions.push(UiAction::NextPage);
        }
        if let Some(last) = total {
            if ui.add_enabled(!at_end, egui::Button::new("»")).clicked() {
                actions.push(UiAction::GoToPage(last));
            }
        }

        ui.separator();
        ui.label(range_label(browser));
    });
}

/// Up to `width` consecutive page numbers around `current`. Without a known
/// total only pages up to `current` plus one are offered.
pub fn page_window(current: u32, total: Option<u32>, width: u32) -> RangeInclusive<u32> {
    let last = total.unwrap_or(current.saturating_add(1)).max(1);
    let current = current.clamp(1, last);
    let width = width.max(1);

    let start = current.saturating_sub(width / 2).max(1);
    let end = start.saturating_add(width - 1).min(last);
    let start = end.saturating_sub(width - 1).max(1).min(start);
    start..=end
}

fn range_label(browser: &ArtworkBrowser) -> String {
    let shown = browser.rows().len() as u64;
    match browser.total_records() {
        Some(total) if shown > 0 && !browser.is_showing_stale() => {
            let first = browser.first_row_index() + 1;
            format!("Showing {first} to {} of {total}", first + shown - 1)
        }
        _ => format!("Page {}", browser.current_page()),
    }
}
