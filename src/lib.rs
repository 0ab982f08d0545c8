//! Animated bar-chart race of anemia prevalence: the ten most affected
//! countries per year, played back year by year in an egui window.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod driver;
pub mod state;
pub mod ui;
