use brickrush::app::BrickrushApp;
use brickrush::{init_logging, Settings};

fn main() -> eframe::Result<()> {
    init_logging();

    let settings = Settings::load();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::Vec2::new(1280.0, 720.0)),
        fullscreen: settings.fullscreen,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Brickrush",
        native_options,
        Box::new(|cc| Box::new(BrickrushApp::new(cc, settings))),
    )
}
