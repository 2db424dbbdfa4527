//! Ingestion of JSON logging configuration documents.
//!
//! A document carries two top-level arrays: `log_option`, the recognized
//! option names, and `option_details`, one object of settings per option.
//! Parsing walks both arrays into a [`LogConfig`].
//!
//! ```rust
//! let cfg = logopt_parser::parse_from_text(
//!     r#"{"log_option":["a"],"option_details":[{"option_name":"a","logging_enable":"on"}]}"#,
//! )
//! .unwrap();
//!
//! assert!(cfg.options.contains("a"));
//! assert_eq!(cfg.details.get("a").unwrap().logging_enabled(), Some(Ok(true)));
//! ```

mod error;
pub use error::{ParseError, ParseErrorKind, ParseResult};

mod loader;
pub use loader::load;

mod parse;
pub use parse::parse_into;

use std::path::Path;

pub use logopt_model::{LogConfig, LogOptions, OptionDetail, OptionDetails};

/// Parses a document held in memory into a fresh [`LogConfig`].
///
/// On [`ParseError::SchemaViolation`] the names collected before the failure
/// are available through [`ParseError::partial`].
pub fn parse_from_text(text: &str) -> ParseResult<LogConfig> {
    let mut config = LogConfig::default();
    match parse_into(text, &mut config) {
        Ok(()) => Ok(config),
        Err(e) => Err(e.with_partial(config)),
    }
}

/// Reads the file at `path` and parses it into a fresh [`LogConfig`].
///
/// I/O failures are returned before any parsing is attempted.
pub fn parse_from_file(path: impl AsRef<Path>) -> ParseResult<LogConfig> {
    let text = load(path)?;
    parse_from_text(&text)
}
