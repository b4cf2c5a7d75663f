use eframe::egui;

use folia_showcase::{Showcase, ShowcaseConfig};

mod app;

use app::ShowcaseApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match ShowcaseConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };
    let showcase = match Showcase::new(&config) {
        Ok(showcase) => showcase,
        Err(e) => {
            log::error!("Failed to start showcase: {}", e);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        &config.window.title,
        options,
        Box::new(|_cc| Ok(Box::new(ShowcaseApp::new(showcase)))),
    )
}
