//! Tracing Setup
//!
//! Stderr output plus a daily rolling file under the data directory.

use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_PREFIX};
use crate::helpers::{get_or_create_log_dir, is_development};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Outcome of picking a filter directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChoice {
    /// Directive handed to `EnvFilter`
    pub directive: String,
    /// Non-blank candidates that were skipped because they did not parse
    pub rejected: Vec<String>,
}

/// Pick the filter directive: a valid `RUST_LOG`, then a valid persisted level, then the default.
///
/// `RUST_LOG` may be any `EnvFilter` directive list. The persisted value must name a
/// `tracing::Level`; anything else would parse as a target directive and silence all output.
pub fn filter_directive(rust_log: Option<&str>, persisted: Option<&str>) -> FilterChoice {
    let mut rejected = Vec::new();

    if let Some(env) = rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        if EnvFilter::try_new(env).is_ok() {
            return FilterChoice {
                directive: env.to_string(),
                rejected,
            };
        }
        rejected.push(env.to_string());
    }

    if let Some(level) = persisted.map(str::trim).filter(|v| !v.is_empty()) {
        match level.parse::<Level>() {
            Ok(level) => {
                return FilterChoice {
                    directive: level.to_string().to_ascii_lowercase(),
                    rejected,
                };
            }
            Err(_) => rejected.push(level.to_string()),
        }
    }

    FilterChoice {
        directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        rejected,
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the life of `main`.
pub fn init_tracing(persisted_level: Option<&str>) -> Option<WorkerGuard> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let choice = filter_directive(rust_log.as_deref(), persisted_level);
    let filter = EnvFilter::try_new(&choice.directive)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    let (file_layer, guard, log_dir_error) = match get_or_create_log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(is_development()))
        .with(file_layer)
        .init();

    for directive in &choice.rejected {
        tracing::warn!(directive = %directive, "Ignoring invalid log filter");
    }
    if let Some(e) = log_dir_error {
        tracing::warn!(error = %e, "File logging disabled");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_persisted_level() {
        let choice = filter_directive(Some("debug"), Some("warn"));
        assert_eq!(choice.directive, "debug");
        assert!(choice.rejected.is_empty());
    }

    #[test]
    fn persisted_level_used_without_rust_log() {
        assert_eq!(filter_directive(None, Some("warn")).directive, "warn");
        assert_eq!(filter_directive(None, Some("DEBUG")).directive, "debug");
    }

    #[test]
    fn invalid_rust_log_falls_through_to_persisted_level() {
        let choice = filter_directive(Some("hello_gui=loud"), Some("warn"));
        assert_eq!(choice.directive, "warn");
        assert_eq!(choice.rejected, vec!["hello_gui=loud".to_string()]);
    }

    #[test]
    fn unknown_persisted_level_falls_back_to_default() {
        let choice = filter_directive(None, Some("verbose"));
        assert_eq!(choice.directive, DEFAULT_LOG_DIRECTIVE);
        assert_eq!(choice.rejected, vec!["verbose".to_string()]);
    }

    #[test]
    fn blank_values_fall_back_to_default() {
        let choice = filter_directive(Some("  "), Some(""));
        assert_eq!(choice.directive, DEFAULT_LOG_DIRECTIVE);
        assert!(choice.rejected.is_empty());
        assert_eq!(filter_directive(None, None).directive, DEFAULT_LOG_DIRECTIVE);
    }
}
