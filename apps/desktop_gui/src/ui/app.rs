use std::time::{Duration, Instant};

use client_core::ArtworkBrowser;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{self, UiAction, ViewState};
use crate::ui::{table, widgets};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
    pub start_page: u32,
}

pub struct ArtworksApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    state: ViewState,
    api_base_url: String,
}

impl ArtworksApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        browser: ArtworkBrowser,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            state: ViewState::new(browser),
            api_base_url: startup.api_base_url,
        };
        app.perform(UiAction::GoToPage(startup.start_page));
        app
    }

    fn process_ui_events(&mut self) {
        let now = Instant::now();
        while let Ok(event) = self.ui_rx.try_recv() {
            reducer::apply_event(&mut self.state, event, now);
        }
    }

    fn perform(&mut self, action: UiAction) {
        let now = Instant::now();
        if let Some(cmd) = reducer::apply_action(&mut self.state, action, now) {
            if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.state.status) {
                reducer::command_not_sent(&mut self.state, cmd, now);
            }
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(&self.api_base_url);
                });
            });
        });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) -> Vec<UiAction> {
        let mut actions = Vec::new();
        let state = &mut self.state;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Artworks");
                if state.browser.is_loading() {
                    ui.spinner();
                }
            });
            ui.label(
                egui::RichText::new("Artwork Table with Custom Selection")
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(8.0);

            widgets::selection_panel(
                ui,
                &state.browser,
                &mut state.row_count_input,
                &mut actions,
            );
            ui.add_space(8.0);

            if let Some(error) = state.visible_error() {
                widgets::error_banner(ui, &error, &mut actions);
                ui.add_space(8.0);
            }

            let pager_height = ui.spacing().interact_size.y + 12.0;
            let table_height = (ui.available_height() - pager_height).max(120.0);
            ui.allocate_ui(egui::vec2(ui.available_width(), table_height), |ui| {
                if state.browser.rows().is_empty() && state.browser.is_loading() {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                } else if state.browser.rows().is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.weak("No artworks to show");
                    });
                } else {
                    table::artwork_table(ui, &state.browser, &mut actions);
                }
            });

            ui.separator();
            widgets::paginator(ui, &state.browser, &mut actions);
        });

        actions
    }
}

impl eframe::App for ArtworksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_status_bar(ctx);
        for action in self.show_workspace(ctx) {
            self.perform(action);
        }

        // The backend wakes the window on every result; this only keeps the
        // spinner animated.
        if self.state.browser.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

impl Drop for ArtworksApp {
    fn drop(&mut self) {
        let _ = self.cmd_tx.try_send(BackendCommand::Shutdown);
    }
}
