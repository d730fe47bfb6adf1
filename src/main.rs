mod app;
mod frame_clock;
mod star;
mod star_field;
mod types;
mod vec2;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Starfield",
        options,
        Box::new(|cc| Ok(Box::new(app::StarfieldApp::new(cc)))),
    )
}
