use serde::{Deserialize, Serialize};

use crate::{
    error::ModelResult,
    value::{MinMessages, RotationAge, Switch},
};

/// Per-option logging settings taken from one `option_details` object.
///
/// Every setting is optional: a member that was absent from the document, or
/// present with the wrong JSON type, stays `None`. String settings are kept
/// verbatim; the typed accessors interpret them on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDetail {
    /// Key of the record inside [`crate::OptionDetails`].
    option_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_enable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_line_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_min_messages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_truncate_on_rotation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_rotation_age: Option<String>,
    /// Rotation threshold as written in the document (no unit conversion).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_rotation_size: Option<i64>,
}

impl OptionDetail {
    /// Create a record with every setting unset.
    pub fn new(option_name: impl Into<String>) -> Self {
        Self {
            option_name: option_name.into(),
            ..Default::default()
        }
    }

    pub fn option_name(&self) -> &str {
        &self.option_name
    }

    /// Rotation size, reading `0` when the document did not set one.
    pub fn rotation_size(&self) -> i64 {
        self.log_rotation_size.unwrap_or(0)
    }

    /// Interprets `logging_enable` as a boolean switch.
    pub fn logging_enabled(&self) -> Option<ModelResult<bool>> {
        parse_opt::<Switch>(&self.logging_enable).map(|r| r.map(bool::from))
    }

    /// Interprets `log_truncate_on_rotation` as a boolean switch.
    pub fn truncate_on_rotation(&self) -> Option<ModelResult<bool>> {
        parse_opt::<Switch>(&self.log_truncate_on_rotation).map(|r| r.map(bool::from))
    }

    /// Interprets `log_min_messages` as a severity threshold.
    pub fn min_messages(&self) -> Option<ModelResult<MinMessages>> {
        parse_opt(&self.log_min_messages)
    }

    /// Interprets `log_rotation_age` as a rotation interval.
    pub fn rotation_age(&self) -> Option<ModelResult<RotationAge>> {
        parse_opt(&self.log_rotation_age)
    }
}

fn parse_opt<T>(raw: &Option<String>) -> Option<ModelResult<T>>
where
    T: std::str::FromStr<Err = crate::ModelError>,
{
    raw.as_deref().map(str::parse)
}
