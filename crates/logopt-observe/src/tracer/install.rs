use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::tracer::{
    config::TraceConfig,
    error::{ObserveError, ObserveResult},
    object::TraceRfc3339,
};

pub(super) fn install_text(cfg: &TraceConfig) -> ObserveResult<()> {
    let layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(TraceRfc3339);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.filter.to_env_filter())
        .with(layer);
    try_install(subscriber)
}

pub(super) fn install_json(cfg: &TraceConfig) -> ObserveResult<()> {
    let layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(TraceRfc3339);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.filter.to_env_filter())
        .with(layer);
    try_install(subscriber)
}

#[cfg(target_os = "linux")]
pub(super) fn install_journald(cfg: &TraceConfig) -> ObserveResult<()> {
    let journald =
        tracing_journald::layer().map_err(|e| ObserveError::JournaldInitFailed(e.to_string()))?;

    let subscriber = tracing_subscriber::registry()
        .with(cfg.filter.to_env_filter())
        .with(journald);
    try_install(subscriber)
}

#[cfg(not(target_os = "linux"))]
pub(super) fn install_journald(_cfg: &TraceConfig) -> ObserveResult<()> {
    Err(ObserveError::JournaldNotSupported)
}

fn try_install<S>(subscriber: S) -> ObserveResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| ObserveError::AlreadyInitialized)
}
