mod config;
mod error;
mod install;
mod object;

pub use config::TraceConfig;
pub use error::{ObserveError, ObserveResult};
pub use object::{TraceFilter, TraceFormat, TraceRfc3339};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Library crates of this workspace only emit `tracing` events; nothing is
/// printed until the embedding application installs a subscriber, either
/// with this function or its own.
///
/// # Examples
/// Driving the process's own diagnostics from a parsed option detail:
/// ```rust
/// use logopt_model::OptionDetail;
/// use logopt_observe::{TraceConfig, init_tracing};
///
/// let mut detail = OptionDetail::new("server");
/// detail.logging_enable = Some("on".into());
/// detail.log_min_messages = Some("debug1".into());
///
/// let cfg = TraceConfig::from_detail(&detail).expect("valid detail settings");
/// assert_eq!(cfg.filter.as_str(), "debug");
///
/// init_tracing(&cfg).expect("subscriber installed once");
/// tracing::debug!(option = detail.option_name(), "tracing ready");
/// ```
pub fn init_tracing(cfg: &TraceConfig) -> ObserveResult<()> {
    match cfg.format {
        TraceFormat::Text => install::install_text(cfg),
        TraceFormat::Json => install::install_json(cfg),
        TraceFormat::Journald => install::install_journald(cfg),
    }
}
