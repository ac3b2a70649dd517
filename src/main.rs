mod app;

use eframe::{CreationContext, NativeOptions, egui};

use app::PassFormApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    log::info!("Starting PassForm");

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PassForm")
            .with_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PassForm",
        native_options,
        Box::new(|_cc: &CreationContext| {
            Ok(Box::new(PassFormApp::default()))
        }),
    )
}
