use std::path::PathBuf;

use logopt_model::LogConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A top-level section is missing or is not an array.
    ///
    /// `partial` holds whatever was collected before the failure when the
    /// error comes from a value-returning entry point; it is `None` from
    /// [`crate::parse_into`], where the caller already owns that state.
    #[error("Invalid {section}")]
    SchemaViolation {
        section: &'static str,
        partial: Option<Box<LogConfig>>,
    },
}

/// Discriminant of [`ParseError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Io,
    MalformedInput,
    SchemaViolation,
}

impl ParseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(section: &'static str) -> Self {
        Self::SchemaViolation {
            section,
            partial: None,
        }
    }

    /// Attaches the partially populated config to a schema violation.
    ///
    /// Other variants are returned unchanged.
    pub(crate) fn with_partial(self, config: LogConfig) -> Self {
        match self {
            Self::SchemaViolation { section, .. } => Self::SchemaViolation {
                section,
                partial: Some(Box::new(config)),
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::Io { .. } => ParseErrorKind::Io,
            Self::MalformedInput(_) => ParseErrorKind::MalformedInput,
            Self::SchemaViolation { .. } => ParseErrorKind::SchemaViolation,
        }
    }

    pub fn partial(&self) -> Option<&LogConfig> {
        match self {
            Self::SchemaViolation { partial, .. } => partial.as_deref(),
            _ => None,
        }
    }

    pub fn into_partial(self) -> Option<LogConfig> {
        match self {
            Self::SchemaViolation { partial, .. } => partial.map(|b| *b),
            _ => None,
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
