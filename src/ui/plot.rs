use std::ops::RangeInclusive;

use eframe::egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{
    uniform_grid_spacer, Bar, BarChart, GridMark, Line, LineStyle, Plot, PlotBounds, PlotPoint,
    PlotPoints, Text,
};

use super::scene::{FrameScene, CATEGORY_AXIS_LABEL, VALUE_AXIS_LABEL};

const BAR_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Bar-race plot (central panel)
// ---------------------------------------------------------------------------

/// Draw one frame. The plot is rebuilt from `scene` on every call, so nothing
/// from the previous year survives.
pub fn race_plot(ui: &mut Ui, scene: &FrameScene) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&scene.title).strong());
    });
    ui.add_space(8.0);

    let labels: Vec<String> = scene.bars.iter().map(|b| b.label.clone()).collect();
    let slots = scene.bars.len().max(1) as f64;
    let bounds = scene.bounds;

    Plot::new("bar_race")
        .x_axis_label(VALUE_AXIS_LABEL)
        .y_axis_label(CATEGORY_AXIS_LABEL)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .y_grid_spacer(uniform_grid_spacer(|_| [1.0, 1.0, 1.0]))
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format!("{:.0}", mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [bounds.min, -0.6],
                [bounds.max, slots - 0.4],
            ));

            // Gridlines first so the bars cover them.
            let grid_color = Color32::from_gray(120).gamma_multiply(0.3);
            for &x in &scene.gridlines {
                let points: PlotPoints = vec![[x, -0.6], [x, slots - 0.4]].into();
                plot_ui.line(
                    Line::new(points)
                        .color(grid_color)
                        .style(LineStyle::dashed_loose())
                        .width(1.0),
                );
            }

            let bars: Vec<Bar> = scene
                .bars
                .iter()
                .map(|b| {
                    Bar::new(b.slot as f64, b.value)
                        .name(&b.label)
                        .fill(b.color)
                        .stroke(Stroke::new(0.7, Color32::WHITE))
                        .width(BAR_WIDTH)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).horizontal());

            for b in &scene.bars {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(b.annotation_x, b.slot as f64),
                        RichText::new(&b.annotation).strong().color(Color32::BLACK),
                    )
                    .anchor(Align2::LEFT_CENTER),
                );
            }
        });
}

/// Country name for a whole-number slot on the category axis.
fn category_label(labels: &[String], value: f64) -> String {
    if value < 0.0 || value.fract() != 0.0 {
        return String::new();
    }
    labels.get(value as usize).cloned().unwrap_or_default()
}
