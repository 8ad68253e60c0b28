use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::Theme;
use crate::config;
use crate::data::model::PropertyDataset;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PropertyTrendsApp {
    state: AppState,
    theme: Theme,
}

impl PropertyTrendsApp {
    pub fn new(dataset: Arc<PropertyDataset>) -> Self {
        Self {
            state: AppState::new(dataset),
            theme: Theme::default(),
        }
    }
}

impl eframe::App for PropertyTrendsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: page header ----
        egui::TopBottomPanel::top("header").show(ctx, |ui: &mut Ui| {
            ui.add_space(4.0);
            ui.heading(config::HEADER);
            ui.add_space(4.0);
        });

        // ---- Left side panel: guide and key ----
        egui::SidePanel::left("guide_panel")
            .default_width(config::SIDE_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui: &mut Ui| {
                panels::side_panel(ui, &self.theme);
            });

        // ---- Central panel: selectors, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::selectors(ui, &mut self.state);
                    ui.add_space(8.0);

                    if let Some(view) = &self.state.view {
                        ui.columns(2, |columns: &mut [Ui]| {
                            for (column, chart) in columns.iter_mut().zip(&view.charts) {
                                plot::strip_plot(column, chart, &self.theme);
                            }
                        });
                        ui.add_space(8.0);
                        panels::results_table(ui, view);
                    }

                    if let Some(msg) = &self.state.status_message {
                        ui.label(RichText::new(msg).color(Color32::RED));
                    }

                    panels::footer(ui);
                });
        });
    }
}
