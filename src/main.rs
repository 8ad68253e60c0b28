mod app;
mod color;
mod config;
mod dashboard;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use app::PropertyTrendsApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The dashboard cannot render anything without its table.
    let dataset = match data::loader::load_file(Path::new(config::DATA_PATH)) {
        Ok(ds) => {
            log::info!(
                "Loaded {} rows: {} cities, years {:?}",
                ds.len(),
                ds.cities().len(),
                ds.years()
            );
            Arc::new(ds)
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e:#}");
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(config::WINDOW_SIZE)
            .with_min_inner_size(config::MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        config::WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(PropertyTrendsApp::new(dataset)))),
    )
}
