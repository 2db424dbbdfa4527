use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid switch value: {0} (expected: on|off|true|false|yes|no|1|0)")]
    InvalidSwitch(String),

    #[error("unknown log_min_messages level: {0}")]
    UnknownMinMessages(String),

    #[error("invalid log_rotation_age: {0}")]
    InvalidRotationAge(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
