//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use tracing::{error, info};

use crate::constants::{
    APP_TITLE, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::states::{HelloAppState, HelloGlobalStore, persist_app_state};
use crate::views::GreeterView;

actions!(hello, [Quit, ResetMessage]);

/// Run the Hello GUI application with previously loaded settings
pub fn run_app(settings: HelloAppState) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("secondary-q", Quit, None),
            KeyBinding::new("secondary-r", ResetMessage, Some("Greeter")),
        ]);

        cx.on_action(|_: &Quit, cx: &mut App| {
            persist_app_state(cx, "quit");
            cx.quit();
        });

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = settings.bounds().cloned().unwrap_or_else(|| {
            Bounds::centered(
                None,
                gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });

        let app_state = cx.new(|_| settings);
        cx.set_global(HelloGlobalStore::new(app_state));

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(gpui::size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(APP_TITLE)),
                ..Default::default()
            }),
            ..Default::default()
        };

        match cx.open_window(window_options, |window, cx| cx.new(|cx| GreeterView::new(window, cx))) {
            Ok(_) => info!("Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
