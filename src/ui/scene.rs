use eframe::egui::Color32;
use thiserror::Error;

use crate::data::model::Record;
use crate::data::scale::AxisBounds;

pub const VALUE_AXIS_LABEL: &str = "Anemic Percentage (%)";
pub const CATEGORY_AXIS_LABEL: &str = "Country";

/// Bad input reached the renderer. Surfaced to the user, never skipped.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("{label}: value {value} is not finite")]
    NonFiniteValue { label: String, value: f64 },

    #[error("axis bounds [{min}, {max}] are not a valid range")]
    InvalidBounds { min: f64, max: f64 },
}

// ---------------------------------------------------------------------------
// Declarative frame description
// ---------------------------------------------------------------------------

/// One horizontal bar with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Category-axis slot, 0 at the bottom.
    pub slot: usize,
    pub label: String,
    pub value: f64,
    pub color: Color32,
    /// Value text, e.g. `42.7%`.
    pub annotation: String,
    /// Where the annotation starts on the value axis.
    pub annotation_x: f64,
}

/// Everything needed to draw one year of the race. Built fresh each tick;
/// the presentation layer draws it onto a cleared plot.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameScene {
    pub year: i32,
    pub title: String,
    pub bounds: AxisBounds,
    /// Bottom-to-top, smallest value first.
    pub bars: Vec<BarSpec>,
    /// Value-axis positions of the dashed gridlines.
    pub gridlines: Vec<f64>,
}

impl FrameScene {
    /// Category-axis text for a slot, if a bar occupies it.
    pub fn label_at(&self, slot: usize) -> Option<&str> {
        self.bars.get(slot).map(|b| b.label.as_str())
    }
}

/// Build the scene for one frame.
///
/// `ranked` is drawn in the given order, so an ascending subset reads from the
/// smallest bar at the bottom to the largest at the top.
pub fn render_frame(
    ranked: &[Record],
    bounds: AxisBounds,
    year: i32,
    color_of: impl Fn(&str) -> Color32,
) -> Result<FrameScene, RenderError> {
    if !bounds.is_valid() {
        return Err(RenderError::InvalidBounds {
            min: bounds.min,
            max: bounds.max,
        });
    }

    let bars = ranked
        .iter()
        .enumerate()
        .map(|(slot, rec)| {
            if !rec.value.is_finite() {
                return Err(RenderError::NonFiniteValue {
                    label: rec.area_label.clone(),
                    value: rec.value,
                });
            }
            Ok(BarSpec {
                slot,
                label: rec.area_label.clone(),
                value: rec.value,
                color: color_of(&rec.area_label),
                annotation: format_percent(rec.value),
                annotation_x: rec.value + bounds.label_offset,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FrameScene {
        year,
        title: format!(
            "Top {} Countries by Anemic Percentage - Year {year}",
            bars.len()
        ),
        bounds,
        bars,
        gridlines: grid_ticks(&bounds),
    })
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Round tick positions (1, 2 or 5 × 10^k apart) inside `bounds`.
pub fn grid_ticks(bounds: &AxisBounds) -> Vec<f64> {
    const TARGET_TICKS: f64 = 6.0;

    let span = bounds.span();
    if !(span > 0.0) || !span.is_finite() {
        return Vec::new();
    }

    let raw = span / TARGET_TICKS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (bounds.min / step).ceil() as i64;
    let last = (bounds.max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}
