//! Moji picker - iced UI entry point.
//!
//! Build with: cargo build --features iced-ui

use std::sync::Arc;

use iced::{window, Size};
use moji::ui::MojiApp;
use moji::{logging, Config, Database};

fn main() -> iced::Result {
    let (config, report) = Config::load();
    logging::init(&config.general);
    for problem in &report.problems {
        tracing::warn!("{}", problem);
    }

    let database = Arc::new(Database::load(&config.database.resolve()));
    if database.is_empty() {
        tracing::warn!("Emoji database is empty, every search will come back blank");
    }

    let window_settings = window::Settings {
        size: Size::new(400.0, 120.0),
        position: window::Position::Centered,
        resizable: false,
        // Lets appearance.opacity show the desktop behind the window
        transparent: true,
        ..Default::default()
    };

    iced::application("Emoji Picker", MojiApp::update, MojiApp::view)
        .subscription(MojiApp::subscription)
        .style(MojiApp::style)
        .window(window_settings)
        .run_with(move || MojiApp::new(config, database))
}
