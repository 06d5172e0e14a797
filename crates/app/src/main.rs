//! Reserva - meeting room booking
//!
//! Desktop front end for browsing rooms, booking them and reviewing
//! reservations. All data comes from a static catalog; nothing is persisted.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod booking_dialog;
mod config;
mod state;
mod viewmodel;

slint::include_modules!();

fn main() -> Result<(), slint::PlatformError> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Reserva");

    let config = match config::AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to read config, using defaults: {}", e);
            config::AppConfig::default()
        }
    };

    // Initialize application state
    let app_state = match state::AppState::from_config(&config) {
        Ok(app) => Arc::new(app.with_cancel_handler(state::logging_cancel_handler())),
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(today = %app_state.today(), "Application state ready");

    // Create main window
    let main_window = MainWindow::new()?;

    viewmodel::setup_bindings(&main_window, app_state);

    main_window.run()
}
