use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Boolean setting written as a word (`on`/`off`) or a literal (`true`/`1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
}

impl FromStr for Switch {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "true" | "yes" | "1" => Ok(Switch::On),
            "off" | "false" | "no" | "0" => Ok(Switch::Off),
            _ => Err(ModelError::InvalidSwitch(s.to_string())),
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Switch::On => "on",
            Switch::Off => "off",
        })
    }
}

impl From<Switch> for bool {
    fn from(s: Switch) -> Self {
        matches!(s, Switch::On)
    }
}

impl From<bool> for Switch {
    fn from(b: bool) -> Self {
        if b { Switch::On } else { Switch::Off }
    }
}
