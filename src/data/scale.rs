use serde::Deserialize;

use super::model::{Dataset, Record};

/// Lower bound used by the per-frame policy unless configured otherwise.
pub const DEFAULT_PER_FRAME_LOWER_BOUND: f64 = 5.0;

/// Smallest visible span; keeps all-zero or tiny frames drawable.
pub const MIN_AXIS_SPAN: f64 = 1.0;

// ---------------------------------------------------------------------------
// Axis bounds
// ---------------------------------------------------------------------------

/// Visible range of the value (horizontal) axis for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    /// Distance from a bar's end to its value annotation.
    pub label_offset: f64,
}

impl AxisBounds {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }

    /// Widen an empty or inverted range to [`MIN_AXIS_SPAN`] above `min`.
    fn widened(mut self) -> Self {
        self.max = self.max.max(self.min + MIN_AXIS_SPAN);
        self
    }
}

// ---------------------------------------------------------------------------
// Scale policy
// ---------------------------------------------------------------------------

/// How the value axis is sized. Chosen once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalePolicy {
    /// Same bounds for every frame, derived from the whole dataset.
    #[default]
    Global,
    /// Bounds rescale to each frame's largest value.
    PerFrame {
        #[serde(default = "default_lower_bound")]
        lower_bound: f64,
    },
}

fn default_lower_bound() -> f64 {
    DEFAULT_PER_FRAME_LOWER_BOUND
}

/// A policy bound to a dataset. Global bounds are computed up front so every
/// frame of the run sees exactly the same axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    Global(AxisBounds),
    PerFrame { lower_bound: f64 },
}

impl AxisScale {
    pub fn new(policy: ScalePolicy, dataset: &Dataset) -> Self {
        match policy {
            ScalePolicy::Global => {
                let (lo, hi) = dataset.value_range().unwrap_or((0.0, 0.0));
                AxisScale::Global(
                    AxisBounds {
                        min: (lo * 0.9).max(0.0),
                        max: hi * 1.1,
                        label_offset: hi * 0.01,
                    }
                    .widened(),
                )
            }
            ScalePolicy::PerFrame { lower_bound } => AxisScale::PerFrame { lower_bound },
        }
    }

    /// Bounds for a frame whose ranked subset is `frame`.
    pub fn bounds_for(&self, frame: &[Record]) -> AxisBounds {
        match *self {
            AxisScale::Global(bounds) => bounds,
            AxisScale::PerFrame { lower_bound } => {
                let frame_max = frame
                    .iter()
                    .map(|r| r.value)
                    .fold(f64::NEG_INFINITY, f64::max);
                let frame_max = if frame_max.is_finite() { frame_max } else { 0.0 };
                AxisBounds {
                    min: lower_bound,
                    max: frame_max * 1.1,
                    label_offset: frame_max * 0.01,
                }
                .widened()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            Record::new(2000, "A", 20.0),
            Record::new(2000, "B", 60.0),
            Record::new(2001, "A", 30.0),
            Record::new(2001, "B", 40.0),
        ])
    }

    #[test]
    fn global_bounds_cover_whole_dataset() {
        let scale = AxisScale::new(ScalePolicy::Global, &dataset());
        let b = scale.bounds_for(&[]);
        assert!((b.min - 18.0).abs() < 1e-9);
        assert!((b.max - 66.0).abs() < 1e-9);
        assert!((b.label_offset - 0.6).abs() < 1e-9);
    }

    #[test]
    fn global_bounds_ignore_frame_contents() {
        let ds = dataset();
        let scale = AxisScale::new(ScalePolicy::Global, &ds);
        let a = scale.bounds_for(&ds.records()[..2]);
        let b = scale.bounds_for(&ds.records()[2..]);
        assert_eq!(a, b);
    }

    #[test]
    fn global_lower_bound_never_negative() {
        let ds = Dataset::from_records(vec![Record::new(1, "A", 0.0), Record::new(1, "B", 10.0)]);
        let b = AxisScale::new(ScalePolicy::Global, &ds).bounds_for(&[]);
        assert_eq!(b.min, 0.0);
    }

    #[test]
    fn per_frame_bounds_follow_frame_max() {
        let ds = dataset();
        let scale = AxisScale::new(ScalePolicy::PerFrame { lower_bound: 5.0 }, &ds);
        let b = scale.bounds_for(&ds.records()[2..]);
        assert_eq!(b.min, 5.0);
        assert!((b.max - 44.0).abs() < 1e-9);
    }

    #[test]
    fn all_zero_dataset_still_has_a_visible_axis() {
        let ds = Dataset::from_records(vec![Record::new(2000, "A", 0.0), Record::new(2000, "B", 0.0)]);
        let b = AxisScale::new(ScalePolicy::Global, &ds).bounds_for(ds.records());
        assert!(b.is_valid());
        assert_eq!((b.min, b.max), (0.0, MIN_AXIS_SPAN));
    }

    #[test]
    fn frame_below_lower_bound_still_has_a_visible_axis() {
        let ds = Dataset::from_records(vec![Record::new(2000, "A", 3.0), Record::new(2000, "B", 4.0)]);
        let scale = AxisScale::new(ScalePolicy::PerFrame { lower_bound: 5.0 }, &ds);
        let b = scale.bounds_for(ds.records());
        assert!(b.is_valid());
        assert_eq!((b.min, b.max), (5.0, 6.0));
    }

    #[test]
    fn empty_frame_under_per_frame_policy_is_drawable() {
        let scale = AxisScale::new(ScalePolicy::PerFrame { lower_bound: 5.0 }, &dataset());
        assert!(scale.bounds_for(&[]).is_valid());
    }

    #[test]
    fn wide_ranges_are_left_alone() {
        let ds = dataset();
        let scale = AxisScale::new(ScalePolicy::PerFrame { lower_bound: 5.0 }, &ds);
        let b = scale.bounds_for(&ds.records()[..2]);
        assert!((b.max - 66.0).abs() < 1e-9);
    }

    #[test]
    fn policy_parses_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: ScalePolicy,
        }
        let w: Wrapper = toml::from_str("policy = \"global\"").unwrap();
        assert_eq!(w.policy, ScalePolicy::Global);

        let w: Wrapper = toml::from_str("policy = { per_frame = { lower_bound = 2.5 } }").unwrap();
        assert_eq!(w.policy, ScalePolicy::PerFrame { lower_bound: 2.5 });

        let w: Wrapper = toml::from_str("policy = { per_frame = {} }").unwrap();
        assert_eq!(
            w.policy,
            ScalePolicy::PerFrame {
                lower_bound: DEFAULT_PER_FRAME_LOWER_BOUND
            }
        );
    }
}
