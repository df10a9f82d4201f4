//! Application State
//!
//! Persisted window settings and the global store that exposes them.

use crate::constants::SETTINGS_FILE;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{App, AppContext, Bounds, Context, Entity, Global, Pixels};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

// ==================== Persisted State ====================

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join(SETTINGS_FILE))
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelloAppState {
    log_level: Option<String>,
    bounds: Option<Bounds<Pixels>>,
}

impl HelloAppState {
    /// Load state from the settings file in the config directory
    ///
    /// Runs before tracing is installed, so it does not log; pass the
    /// result to [`HelloAppState::or_default`] once the subscriber is up.
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        Self::load_from(&path)
    }

    /// Load state from a settings file; a missing or blank file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let value = std::fs::read_to_string(path)?;
        Self::parse(&value)
    }

    /// Log the outcome of a load and fall back to defaults on failure
    pub fn or_default(loaded: Result<Self>) -> Self {
        match loaded {
            Ok(state) => {
                info!(log_level = ?state.log_level, has_bounds = state.bounds.is_some(), "Loaded settings file");
                state
            }
            Err(e) => {
                error!(error = %e, file = SETTINGS_FILE, "Failed to load settings file, using defaults");
                Self::new()
            }
        }
    }

    /// Parse settings from TOML text
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        Ok(toml::from_str(value)?)
    }

    /// Serialize settings to TOML text
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<HelloGlobalStore>()`
#[derive(Clone)]
pub struct HelloGlobalStore {
    app_state: Entity<HelloAppState>,
}

impl HelloGlobalStore {
    /// Create a new global store
    pub fn new(app_state: Entity<HelloAppState>) -> Self {
        Self { app_state }
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a HelloAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut HelloAppState, &mut Context<HelloAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for HelloGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &HelloAppState) -> Result<()> {
    let path = get_config_path()?;
    std::fs::write(path, state.to_toml()?)?;
    Ok(())
}

/// Save the current app state, logging instead of failing
pub fn persist_app_state(cx: &App, reason: &'static str) {
    let Some(store) = cx.try_global::<HelloGlobalStore>() else {
        return;
    };

    match save_app_state(store.read(cx)) {
        Ok(()) => info!(reason, "State saved successfully"),
        Err(e) => error!(error = %e, reason, "Failed to save state"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use gpui::{point, px, size};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            let buf = self.0.lock().expect("log buffer lock");
            String::from_utf8_lossy(&buf).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    #[test]
    fn blank_settings_yield_defaults() {
        assert_eq!(HelloAppState::parse("").ok(), Some(HelloAppState::default()));
        assert_eq!(HelloAppState::parse("  \n").ok(), Some(HelloAppState::default()));
    }

    #[test]
    fn malformed_settings_report_parse_error() {
        let result = HelloAppState::parse("log_level = [");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn saved_settings_load_back() {
        let mut state = HelloAppState::new();
        state.set_bounds(Bounds {
            origin: point(px(100.0), px(50.0)),
            size: size(px(480.0), px(320.0)),
        });
        state.log_level = Some("debug".to_string());

        let text = state.to_toml().expect("serialize settings");
        let loaded = HelloAppState::parse(&text).expect("parse settings");

        assert_eq!(loaded, state);
        assert_eq!(loaded.log_level(), Some("debug"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!(
            "hello-gui-missing-settings-{}-{:?}.toml",
            std::process::id(),
            std::thread::current().id(),
        ));
        let _ = std::fs::remove_file(&path);

        let state = HelloAppState::load_from(&path).expect("load defaults");
        assert!(state.bounds().is_none());
        assert!(state.log_level().is_none());
    }

    #[test]
    fn failed_load_is_logged_and_falls_back() {
        let loaded = HelloAppState::parse("log_level = [");

        let (state, logs) = with_captured_logs(|| HelloAppState::or_default(loaded));

        assert_eq!(state, HelloAppState::default());
        assert!(logs.contains("Failed to load settings file"), "logs: {logs}");
    }

    #[test]
    fn successful_load_is_logged() {
        let loaded = HelloAppState::parse("log_level = \"warn\"");

        let (state, logs) = with_captured_logs(|| HelloAppState::or_default(loaded));

        assert_eq!(state.log_level(), Some("warn"));
        assert!(logs.contains("Loaded settings file"), "logs: {logs}");
    }

    #[test]
    fn loading_emits_no_events_before_tracing_starts() {
        let path = std::env::temp_dir().join(format!(
            "hello-gui-quiet-load-{}-{:?}.toml",
            std::process::id(),
            std::thread::current().id(),
        ));
        std::fs::write(&path, "log_level = [").expect("write settings");

        let (result, logs) = with_captured_logs(|| HelloAppState::load_from(&path));
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(Error::TomlDe { .. })));
        assert!(logs.is_empty(), "logs: {logs}");
    }
}
