use serde::Serialize;

use crate::{LogOptions, OptionDetails};

/// Aggregate result of ingesting one logging configuration document.
///
/// `Default` is the empty state the parser starts from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LogConfig {
    /// Names listed under `log_option`.
    #[serde(rename = "log_option")]
    pub options: LogOptions,
    /// Records listed under `option_details`, keyed by option name.
    #[serde(rename = "option_details")]
    pub details: OptionDetails,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when neither collection holds anything.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.details.is_empty()
    }

    /// Option names that have no detail record.
    pub fn options_without_details(&self) -> impl Iterator<Item = &str> {
        self.options.iter().filter(|name| !self.details.contains(name))
    }
}
