#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    iced::application(
        app::DocxApp::build,
        app::DocxApp::handle_update,
        app::DocxApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::DocxApp::theme)
    .window_size((global_constants::WINDOW_WIDTH, global_constants::WINDOW_HEIGHT))
    .run()
}
