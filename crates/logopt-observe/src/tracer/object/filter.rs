use std::str::FromStr;

use logopt_model::MinMessages;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::tracer::ObserveError;

/// Validated `EnvFilter` expression, e.g. `"info"` or `"logopt_parser=trace,warn"`.
///
/// The raw string is kept so the value can be serialized back as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraceFilter(String);

impl TraceFilter {
    pub fn new(s: impl Into<String>) -> Result<Self, ObserveError> {
        Self::try_from(s.into())
    }

    /// Filter that discards every event.
    pub fn off() -> Self {
        Self("off".to_string())
    }

    /// Maps a configured minimum severity onto the closest tracing level.
    ///
    /// `debug5`..`debug3` map to `trace`, `debug2`/`debug1` to `debug`,
    /// `info`/`notice` to `info`, `warning` to `warn`, and the rest to `error`.
    pub fn from_min_messages(level: MinMessages) -> Self {
        let directive = match level {
            MinMessages::Debug5 | MinMessages::Debug4 | MinMessages::Debug3 => "trace",
            MinMessages::Debug2 | MinMessages::Debug1 => "debug",
            MinMessages::Info | MinMessages::Notice => "info",
            MinMessages::Warning => "warn",
            MinMessages::Error | MinMessages::Log | MinMessages::Fatal | MinMessages::Panic => {
                "error"
            }
        };
        Self(directive.to_string())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for TraceFilter {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for TraceFilter {
    type Err = ObserveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for TraceFilter {
    type Error = ObserveError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(TraceFilter(s)),
            Err(e) => Err(ObserveError::InvalidFilter(format!("{s}: {e}"))),
        }
    }
}

impl From<TraceFilter> for String {
    fn from(f: TraceFilter) -> Self {
        f.0
    }
}
