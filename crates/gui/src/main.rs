//! CyberChess GUI Application
//!
//! A graphical interface for the cybersecurity chess learning game:
//! - Play as White against the greedy computer opponent
//! - Learn a vulnerability concept from every captured piece

mod app;
mod board;
mod menu;
mod styles;

use app::CyberChessApp;
use iced::application;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    application("Cybersecurity Chess", CyberChessApp::update, CyberChessApp::view)
        .theme(CyberChessApp::theme)
        .window_size((1280.0, 900.0))
        .run_with(CyberChessApp::new)
}
