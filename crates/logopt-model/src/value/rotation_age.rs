use std::{fmt, str::FromStr, time::Duration};

use crate::error::{ModelError, ModelResult};

/// Time-based rotation interval.
///
/// Written as an integer with an optional unit suffix: `ms`, `s`, `min`, `h`
/// or `d`. A bare integer counts minutes. Zero disables time-based rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RotationAge(Duration);

impl RotationAge {
    /// Rotation interval, or `None` when time-based rotation is disabled.
    pub fn interval(&self) -> Option<Duration> {
        (!self.0.is_zero()).then_some(self.0)
    }

    pub fn is_disabled(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for RotationAge {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        let invalid = || ModelError::InvalidRotationAge(s.to_string());

        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, unit) = trimmed.split_at(split);

        let n: u64 = digits.parse().map_err(|_| invalid())?;
        let millis_per_unit: u64 = match unit.trim().to_ascii_lowercase().as_str() {
            "ms" => 1,
            "s" => 1_000,
            "" | "min" => 60_000,
            "h" => 3_600_000,
            "d" => 86_400_000,
            _ => return Err(invalid()),
        };

        let millis = n.checked_mul(millis_per_unit).ok_or_else(invalid)?;
        Ok(Self(Duration::from_millis(millis)))
    }
}

impl fmt::Display for RotationAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.0.as_millis();
        match ms {
            0 => f.write_str("0"),
            _ if ms % 86_400_000 == 0 => write!(f, "{}d", ms / 86_400_000),
            _ if ms % 3_600_000 == 0 => write!(f, "{}h", ms / 3_600_000),
            _ if ms % 60_000 == 0 => write!(f, "{}min", ms / 60_000),
            _ if ms % 1_000 == 0 => write!(f, "{}s", ms / 1_000),
            _ => write!(f, "{ms}ms"),
        }
    }
}
