#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;

mod app;
mod handlers;
mod logger;
mod views;
mod worker;

fn main() -> eframe::Result<()> {
    let logger = logger::AppLogger::new(200);
    let log_view = logger.clone();
    if logger.init().is_err() {
        eprintln!("logger already installed, continuing without in-app log");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start tokio runtime");
    let tokio_handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("SnapDoc"),
        ..Default::default()
    };

    eframe::run_native(
        "SnapDoc",
        options,
        Box::new(move |cc| Ok(Box::new(app::SnapDocApp::new(cc, tokio_handle, log_view)))),
    )
}
