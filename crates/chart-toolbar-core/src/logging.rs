//! Logging facilities for the chart toolbar.
//!
//! The toolbar crates use the `tracing` crate for instrumentation and never
//! install a subscriber themselves. To see logs, install one in the host:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("chart_toolbar=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Reactive primitives target.
    pub const CORE: &str = "chart_toolbar_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "chart_toolbar_core::signal";
    /// Per-item state target.
    pub const ITEM: &str = "chart_toolbar::item";
    /// Group composition and cross-item policy target.
    pub const COMPOSER: &str = "chart_toolbar::composer";
    /// Controller (orientation and tap dispatch) target.
    pub const CONTROLLER: &str = "chart_toolbar::controller";
    /// Configuration loading target.
    pub const CONFIG: &str = "chart_toolbar::config";
}

/// Build an `EnvFilter` directive string enabling `level` for every toolbar target.
///
/// ```
/// use chart_toolbar_core::logging::directive_for_all;
///
/// assert_eq!(
///     directive_for_all("debug"),
///     "chart_toolbar_core=debug,chart_toolbar=debug"
/// );
/// ```
pub fn directive_for_all(level: &str) -> String {
    format!("{}={level},chart_toolbar={level}", targets::CORE)
}
