use std::str::FromStr;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Dashboard theme
// ---------------------------------------------------------------------------

/// Parse a `#rrggbb` string, falling back to grey on malformed input.
pub fn hex(s: &str) -> Color32 {
    match Srgb::<u8>::from_str(s) {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(e) => {
            log::warn!("Invalid theme colour {s:?}: {e}");
            Color32::GRAY
        }
    }
}

/// Shift lightness of `c` by `delta` (in `[-1, 1]`) in HSL space.
pub fn shade(c: Color32, delta: f32) -> Color32 {
    let rgb = Srgb::new(c.r(), c.g(), c.b()).into_format::<f32>();
    let mut hsl: Hsl = rgb.into_color();
    hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
    let out: Srgb = hsl.into_color();
    let out = out.into_format::<u8>();
    Color32::from_rgba_unmultiplied(out.red, out.green, out.blue, c.a())
}

/// `c` with its alpha replaced by `alpha` (0.0 – 1.0).
pub fn translucent(c: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), (alpha.clamp(0.0, 1.0) * 255.0) as u8)
}

/// Colours shared by both charts and the sidebar legend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub plot_background: Color32,
    pub others: Color32,
    pub others_edge: Color32,
    pub selected: Color32,
    pub median: Color32,
    pub quartile: Color32,
    pub band: Color32,
    pub title: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        let others = hex("#FFFFFF");
        Theme {
            plot_background: hex("#606C38"),
            others: translucent(others, 0.7),
            others_edge: shade(others, -0.14),
            selected: hex("#00FF7F"),
            median: hex("#F77F00"),
            quartile: hex("#FAF6F5"),
            band: translucent(hex("#808080"), 0.2),
            title: shade(others, -0.14),
        }
    }
}
