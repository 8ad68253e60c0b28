use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    Corner, HLine, Legend, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon,
    Text,
};

use crate::color::Theme;
use crate::config;
use crate::dashboard::ChartView;

// ---------------------------------------------------------------------------
// Strip plot (one per metric)
// ---------------------------------------------------------------------------

/// Render one metric: other cities as a jittered strip, the selected city
/// highlighted, and the global Q1 / median / Q3 reference lines.
pub fn strip_plot(ui: &mut Ui, chart: &ChartView, theme: &Theme) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(chart.metric.title()).strong().color(theme.title));
    });

    let summary = chart.summary;
    let scale = chart.metric.axis_scale();

    ui.scope(|ui: &mut Ui| {
        // egui_plot paints its frame with the extreme background colour.
        ui.visuals_mut().extreme_bg_color = theme.plot_background;

        Plot::new(("strip_plot", chart.metric))
            .height(config::PLOT_HEIGHT)
            .legend(Legend::default().position(Corner::LeftBottom))
            .y_axis_label(chart.metric.axis_label())
            .y_axis_formatter(move |mark, _range| format!("{:.1}", mark.value / scale))
            .show_axes([false, true])
            .show_grid([false, false])
            .include_x(config::X_MIN)
            .include_x(config::X_MAX)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                let band: PlotPoints = vec![
                    [config::X_MIN, summary.q1],
                    [config::BAND_RIGHT, summary.q1],
                    [config::BAND_RIGHT, summary.q3],
                    [config::X_MIN, summary.q3],
                ]
                .into();
                plot_ui.polygon(
                    Polygon::new(band)
                        .fill_color(theme.band)
                        .stroke(Stroke::NONE),
                );

                for (y, label, color) in [
                    (summary.q1, "Q1", theme.quartile),
                    (summary.median, "Median", theme.median),
                    (summary.q3, "Q3", theme.quartile),
                ] {
                    plot_ui.hline(
                        HLine::new(y)
                            .color(color)
                            .width(0.75)
                            .style(LineStyle::dashed_dense()),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(config::LABEL_X, y),
                            RichText::new(label).strong().color(color),
                        )
                        .anchor(Align2::LEFT_CENTER),
                    );
                }

                draw_markers(
                    plot_ui,
                    &chart.others,
                    config::OTHERS_RADIUS,
                    theme.others,
                    theme.others_edge,
                    None,
                );
                if !chart.selected.is_empty() {
                    draw_markers(
                        plot_ui,
                        &chart.selected,
                        config::SELECTED_RADIUS,
                        theme.selected,
                        Color32::BLACK,
                        Some(&chart.label),
                    );
                }
            });
    });
}

/// Filled circles with a thin outline; only named layers show in the legend.
fn draw_markers(
    plot_ui: &mut egui_plot::PlotUi,
    points: &[[f64; 2]],
    radius: f32,
    fill: Color32,
    edge: Color32,
    name: Option<&str>,
) {
    let mut filled = Points::new(PlotPoints::from(points.to_vec()))
        .shape(MarkerShape::Circle)
        .radius(radius)
        .color(fill)
        .filled(true);
    if let Some(name) = name {
        filled = filled.name(name);
    }
    plot_ui.points(filled);

    plot_ui.points(
        Points::new(PlotPoints::from(points.to_vec()))
            .shape(MarkerShape::Circle)
            .radius(radius)
            .color(edge)
            .filled(false),
    );
}
