use std::io::IsTerminal;

use logopt_model::OptionDetail;
use serde::{Deserialize, Serialize};

use crate::tracer::{
    error::ObserveResult,
    object::{TraceFilter, TraceFormat},
};

/// Tracing subscriber configuration.
///
/// Plain serde data with defaults for every field, so it can be nested in an
/// application's own config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Output format.
    pub format: TraceFormat,
    /// Filter expression (e.g. `"info"`, `"logopt_parser=debug,warn"`).
    pub filter: TraceFilter,
    /// Whether to include module/target names in the output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            format: TraceFormat::default(),
            filter: TraceFilter::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl TraceConfig {
    /// Derives a subscriber setup from a parsed option detail.
    ///
    /// `logging_enable = off` silences everything; otherwise
    /// `log_min_messages` selects the level. Unset settings keep the
    /// defaults, and values that do not parse are reported as errors.
    pub fn from_detail(detail: &OptionDetail) -> ObserveResult<Self> {
        let mut cfg = Self::default();

        if let Some(level) = detail.min_messages() {
            cfg.filter = TraceFilter::from_min_messages(level?);
        }
        if let Some(enabled) = detail.logging_enabled() {
            if !enabled? {
                cfg.filter = TraceFilter::off();
            }
        }
        Ok(cfg)
    }

    /// Color is used only when enabled in config and stdout is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stdout().is_terminal()
    }
}
