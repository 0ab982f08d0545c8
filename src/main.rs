use anemia_race::app::AnemiaRaceApp;
use anemia_race::config::Config;
use anemia_race::data;
use anemia_race::state::AppState;
use anyhow::Context;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load().context("loading settings")?;
    log::info!("Reading data from {}", config.data_path.display());

    let dataset = match data::loader::load_file(&config.data_path) {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Failed to load data: {e}");
            eprintln!("Error: {e}. Check the path and filename.");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} records: {} countries over {} years, interval {:?}, {:?} scale",
        dataset.len(),
        dataset.area_labels().len(),
        dataset.years().len(),
        config.frame_interval(),
        config.scale_policy
    );

    let state = AppState::new(dataset, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Anemia Race – Top 10 Countries",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(AnemiaRaceApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("running window: {e}"))
}
