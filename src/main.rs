// main.rs - Bootstrap: logger, window options, run the app

use chromalife::app::LifeApp;
use chromalife::config::Config;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Chromalife",
        options,
        Box::new(|_cc| Box::new(LifeApp::new(Config::default()))),
    )
}
