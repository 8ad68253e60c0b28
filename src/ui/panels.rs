use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::Theme;
use crate::config;
use crate::dashboard::DashboardView;
use crate::data::model::Metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – usage notes and chart key
// ---------------------------------------------------------------------------

/// Render the static guide in the side panel.
pub fn side_panel(ui: &mut Ui, theme: &Theme) {
    ui.strong("How to use this dashboard:");
    ui.add_space(4.0);
    ui.label("1. Select a city (green dot) and a year.");
    ui.label("2. Compare the selected city against the other cities (white dots).");
    ui.label("3. Compare the chosen city against the national median and the data distribution.");
    ui.label(
        "4. Insight: an appreciation above the national median together with a \
         selling price below it is a possible opportunity.",
    );

    ui.separator();

    ui.strong("Keys:");
    ui.add_space(4.0);
    key(ui, "⚪", theme.others, "Each point represents a city");
    key(ui, "⚪", theme.selected, "Selected city");
    key(ui, "▫", theme.median, "Median value");
    key(ui, "◽", theme.quartile, "Q1 (first quartile): where 25% of data falls under");
    key(ui, "◽", theme.quartile, "Q3 (third quartile): where 75% of data falls under");
    ui.label(RichText::new("Shaded band: between Q1 and Q3").weak());
}

fn key(ui: &mut Ui, glyph: &str, color: Color32, text: &str) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label(RichText::new(glyph).color(color).strong());
        ui.label(text);
    });
}

// ---------------------------------------------------------------------------
// Selection widgets
// ---------------------------------------------------------------------------

/// City and year pickers; any change rebuilds the whole view.
pub fn selectors(ui: &mut Ui, state: &mut AppState) {
    let dataset = Arc::clone(&state.dataset);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("🌎 Select a city");
        let current = state.city.clone();
        egui::ComboBox::from_id_salt("city")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for city in dataset.cities() {
                    if ui.selectable_label(current == *city, city).clicked() {
                        state.select_city(city);
                    }
                }
            });

        ui.add_space(16.0);

        ui.label("🗓 Select a year");
        let current = state.year;
        egui::ComboBox::from_id_salt("year")
            .selected_text(current.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for &year in dataset.years() {
                    if ui
                        .selectable_label(current == year, year.to_string())
                        .clicked()
                    {
                        state.select_year(year);
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Results table
// ---------------------------------------------------------------------------

/// Rows matching the current selection.
pub fn results_table(ui: &mut Ui, view: &DashboardView) {
    ui.strong(format!("{} – {}", view.city, view.year));

    if view.rows.is_empty() {
        ui.label(RichText::new("No data for this city and year.").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(140.0))
        .column(Column::auto().at_least(160.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("City");
            });
            header.col(|ui: &mut Ui| {
                ui.strong(Metric::AnnualAppreciation.column());
            });
            header.col(|ui: &mut Ui| {
                ui.strong("Number_of_Sales");
            });
        })
        .body(|mut body| {
            for rec in &view.rows {
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.city.as_str());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(format!("{:.2}", rec.annual_appreciation_pct));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.label(rec.number_of_sales.to_string());
                    });
                });
            }
        });

    if let Some(true) = view.is_opportunity() {
        ui.label(
            RichText::new("Above-median appreciation at a below-median price: possible opportunity.")
                .color(Color32::from_rgb(0x00, 0xC8, 0x64)),
        );
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.separator();
    ui.label(format!("Last Update: {}", last_update_date()));
    ui.label(RichText::new(config::SOURCE_NOTE).weak());
}

/// Today's local date, `YYYY-MM-DD`.
pub fn last_update_date() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
