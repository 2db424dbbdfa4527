use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::tracer::ObserveError;

/// Output format of the tracing subscriber.
/// - `Text`     — human-readable lines, colored when enabled.
/// - `Json`     — one JSON object per event.
/// - `Journald` — events go to systemd-journald (Linux only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TraceFormat {
    #[default]
    Text,
    Json,
    Journald,
}

impl FromStr for TraceFormat {
    type Err = ObserveError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "journald" | "journal" => {
                #[cfg(target_os = "linux")]
                {
                    Ok(Self::Journald)
                }
                #[cfg(not(target_os = "linux"))]
                {
                    Err(ObserveError::JournaldNotSupported)
                }
            }
            _ => Err(ObserveError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for TraceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraceFormat::Text => "text",
            TraceFormat::Json => "json",
            TraceFormat::Journald => "journald",
        })
    }
}

impl Serialize for TraceFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TraceFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
