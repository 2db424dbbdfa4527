use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Minimum severity a log destination accepts, ordered from most to least verbose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MinMessages {
    Debug5,
    Debug4,
    Debug3,
    Debug2,
    Debug1,
    Info,
    Notice,
    Warning,
    Error,
    Log,
    Fatal,
    Panic,
}

impl MinMessages {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MinMessages::Debug5 => "debug5",
            MinMessages::Debug4 => "debug4",
            MinMessages::Debug3 => "debug3",
            MinMessages::Debug2 => "debug2",
            MinMessages::Debug1 => "debug1",
            MinMessages::Info => "info",
            MinMessages::Notice => "notice",
            MinMessages::Warning => "warning",
            MinMessages::Error => "error",
            MinMessages::Log => "log",
            MinMessages::Fatal => "fatal",
            MinMessages::Panic => "panic",
        }
    }

    /// Returns `true` for the `debug1`..`debug5` family.
    pub const fn is_debug(&self) -> bool {
        matches!(
            self,
            MinMessages::Debug5
                | MinMessages::Debug4
                | MinMessages::Debug3
                | MinMessages::Debug2
                | MinMessages::Debug1
        )
    }
}

impl Default for MinMessages {
    fn default() -> Self {
        MinMessages::Warning
    }
}

impl FromStr for MinMessages {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug5" => Ok(MinMessages::Debug5),
            "debug4" => Ok(MinMessages::Debug4),
            "debug3" => Ok(MinMessages::Debug3),
            "debug2" | "debug" => Ok(MinMessages::Debug2),
            "debug1" => Ok(MinMessages::Debug1),
            "info" => Ok(MinMessages::Info),
            "notice" => Ok(MinMessages::Notice),
            "warning" | "warn" => Ok(MinMessages::Warning),
            "error" => Ok(MinMessages::Error),
            "log" => Ok(MinMessages::Log),
            "fatal" => Ok(MinMessages::Fatal),
            "panic" => Ok(MinMessages::Panic),
            _ => Err(ModelError::UnknownMinMessages(s.to_string())),
        }
    }
}

impl fmt::Display for MinMessages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
