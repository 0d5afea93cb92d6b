//! Shared logging utilities for consistent tracing across components

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use tracing::{error, info};

/// Global component ID - set once at startup
static COMPONENT_ID: OnceLock<ComponentId> = OnceLock::new();

/// Used by library code and tests when no binary has claimed an identity
static DEFAULT_COMPONENT: ComponentId = ComponentId::Standings;

/// Identifies which part of the service emitted a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentId {
    /// Standings engine and sync workflow
    Standings,
    /// HTTP server process
    WebServer,
}

impl ComponentId {
    /// Initialize the global component ID for the webserver binary
    pub fn init_webserver() -> &'static ComponentId {
        COMPONENT_ID.get_or_init(|| ComponentId::WebServer)
    }

    /// Get the global component ID, falling back to `Standings`
    pub fn current() -> &'static ComponentId {
        COMPONENT_ID.get().unwrap_or(&DEFAULT_COMPONENT)
    }

    fn filter_directives(&self, level: &str) -> String {
        match self {
            ComponentId::Standings => format!("standings={level},shared={level}"),
            ComponentId::WebServer => {
                format!("league_server={level},webserver={level},standings={level},shared={level},tower_http={level},axum={level}")
            }
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Standings => write!(f, "standings"),
            ComponentId::WebServer => write!(f, "webserver"),
        }
    }
}

/// Initialize the tracing subscriber for the current component.
///
/// `RUST_LOG` overrides the component filter when set. Safe to call more than
/// once; later calls are ignored.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let directives = ComponentId::current().filter_directives(base_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! component_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! component_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware error logging
#[macro_export]
macro_rules! component_error {
    ($component:expr, $($arg:tt)*) => {
        tracing::error!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! component_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &ComponentId, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(component: &ComponentId, reason: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: &ComponentId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &ComponentId, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(component: &ComponentId, action: &str, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}
