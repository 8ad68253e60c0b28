//! Compile-time dashboard settings.

/// Dataset read once at startup, relative to the working directory.
pub const DATA_PATH: &str = "Property_Trends.csv";

pub const WINDOW_TITLE: &str = "Residential properties (South Africa)";
pub const HEADER: &str = "🏢 Appreciation of residential properties in South Africa";
pub const WINDOW_SIZE: [f32; 2] = [900.0, 860.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 520.0];
pub const SIDE_PANEL_WIDTH: f32 = 260.0;

// Strip plot layout, in plot units. The x axis spans [X_MIN, X_MAX] on every
// chart; points are jittered around x = 0.
pub const X_MIN: f64 = -1.0;
pub const X_MAX: f64 = 1.35;
pub const BAND_RIGHT: f64 = 1.0;
pub const LABEL_X: f64 = 1.03;
pub const OTHERS_JITTER: f64 = 0.85;
pub const SELECTED_JITTER: f64 = 0.15;
pub const JITTER_SEED: u64 = 0x5A_2023;

pub const OTHERS_RADIUS: f32 = 4.0;
pub const SELECTED_RADIUS: f32 = 6.0;
pub const PLOT_HEIGHT: f32 = 380.0;

pub const SOURCE_NOTE: &str = "Source: Data based on market trends from Property24 (2014 - 2023)";
