use eframe::egui;
use tangonote::gui::app::TangonoteApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("loading tangonote");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([540.0, 420.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Tangonote",
        options,
        Box::new(|cc| Ok(Box::new(TangonoteApp::new(cc)))),
    );

    log::info!("unloading tangonote");
    result
}
