//! Hello GUI - Main Entry Point

use hello_gui::app::application::run_app;
use hello_gui::helpers::init_tracing;
use hello_gui::states::HelloAppState;

fn main() {
    // Settings pick the default log level, so they load before tracing starts
    let loaded = HelloAppState::try_load();
    let log_level = loaded.as_ref().ok().and_then(|state| state.log_level());
    let _log_guard = init_tracing(log_level);

    let settings = HelloAppState::or_default(loaded);

    tracing::info!("Starting Hello GUI...");

    // Run the GPUI application
    run_app(settings);
}
