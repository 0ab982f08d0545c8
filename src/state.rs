use crate::color::ColorMap;
use crate::config::Config;
use crate::data::model::Dataset;
use crate::data::scale::{AxisScale, ScalePolicy};
use crate::data::select::select_top_n;
use crate::driver::AnimationDriver;
use crate::ui::scene::{render_frame, FrameScene, RenderError};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Everything the UI needs, independent of rendering.
///
/// The dataset, colour map and axis scale are fixed at construction; only the
/// driver position and status message change while the animation runs.
pub struct AppState {
    pub dataset: Dataset,

    /// Country → colour, stable for the whole run.
    pub colors: ColorMap,

    /// Policy chosen for this run, kept for display.
    pub policy: ScalePolicy,

    scale: AxisScale,

    top_n: usize,

    pub driver: AnimationDriver,

    /// Last render error, shown in the status bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        let colors = ColorMap::new(dataset.area_labels());
        let scale = AxisScale::new(config.scale_policy, &dataset);
        let driver = AnimationDriver::new(dataset.years().to_vec(), config.frame_interval());

        Self {
            dataset,
            colors,
            policy: config.scale_policy,
            scale,
            top_n: config.top_n,
            driver,
            status_message: None,
        }
    }

    /// Select, scale and describe the frame for `year`.
    pub fn scene_for(&self, year: i32) -> Result<FrameScene, RenderError> {
        let ranked = select_top_n(&self.dataset, year, self.top_n);
        let bounds = self.scale.bounds_for(&ranked);
        render_frame(&ranked, bounds, year, |label| self.colors.color_for(label))
    }

    /// Scene for the year the driver is on, `None` before any data exists.
    pub fn current_scene(&self) -> Option<Result<FrameScene, RenderError>> {
        self.driver.current_year().map(|year| self.scene_for(year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        let mut recs = Vec::new();
        for (i, year) in [2000, 2005, 2010].into_iter().enumerate() {
            for c in 0..12 {
                let value = 10.0 + c as f64 * 3.0 + i as f64 * 2.0;
                recs.push(Record::new(year, format!("Country {c}"), value));
            }
        }
        Dataset::from_records(recs)
    }

    #[test]
    fn one_scene_per_year_in_order() {
        let mut state = AppState::new(dataset(), &Config::default());
        let mut years = Vec::new();
        for _ in 0..4 {
            let scene = state.current_scene().unwrap().unwrap();
            assert_eq!(scene.bars.len(), 10);
            years.push(scene.year);
            state.driver.step();
        }
        assert_eq!(years, vec![2000, 2005, 2010, 2000]);
    }

    #[test]
    fn global_policy_keeps_bounds_fixed_across_frames() {
        let state = AppState::new(dataset(), &Config::default());
        let bounds: Vec<_> = state
            .dataset
            .years()
            .iter()
            .map(|&y| state.scene_for(y).unwrap().bounds)
            .collect();
        assert!(bounds.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn per_frame_policy_tracks_each_frame() {
        let config = Config {
            scale_policy: ScalePolicy::PerFrame { lower_bound: 5.0 },
            ..Config::default()
        };
        let state = AppState::new(dataset(), &config);
        let first = state.scene_for(2000).unwrap().bounds;
        let last = state.scene_for(2010).unwrap().bounds;
        assert_eq!(first.min, 5.0);
        assert!(last.max > first.max);
    }

    #[test]
    fn country_keeps_colour_between_years() {
        let state = AppState::new(dataset(), &Config::default());
        let color_in = |year: i32| {
            state
                .scene_for(year)
                .unwrap()
                .bars
                .into_iter()
                .find(|b| b.label == "Country 11")
                .map(|b| b.color)
        };
        assert_eq!(color_in(2000), color_in(2010));
        assert!(color_in(2000).is_some());
    }

    #[test]
    fn top_n_comes_from_config() {
        let config = Config {
            top_n: 3,
            ..Config::default()
        };
        let state = AppState::new(dataset(), &config);
        let scene = state.scene_for(2005).unwrap();
        let labels: Vec<&str> = scene.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Country 9", "Country 10", "Country 11"]);
    }

    #[test]
    fn degenerate_ranges_still_render() {
        let zeros = Dataset::from_records(vec![Record::new(2000, "A", 0.0), Record::new(2000, "B", 0.0)]);
        let scene = AppState::new(zeros, &Config::default()).scene_for(2000).unwrap();
        assert_eq!(scene.bars.len(), 2);

        let small = Dataset::from_records(vec![Record::new(2000, "A", 3.0), Record::new(2000, "B", 4.0)]);
        let config = Config {
            scale_policy: ScalePolicy::PerFrame { lower_bound: 5.0 },
            ..Config::default()
        };
        let scene = AppState::new(small, &config).scene_for(2000).unwrap();
        assert!(scene.bounds.max > scene.bounds.min);
    }
}
