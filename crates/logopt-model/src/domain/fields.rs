//! JSON member names recognized in a logging configuration document.
//!
//! The top-level keys select the two arrays; the remaining constants name the
//! members of an `option_details` object.

/// Top-level array of recognized option names.
pub const LOG_OPTION: &str = "log_option";

/// Top-level array of per-option detail objects.
pub const OPTION_DETAILS: &str = "option_details";

pub const OPTION_NAME: &str = "option_name";
pub const LOGGING_ENABLE: &str = "logging_enable";
pub const LOG_LINE_PREFIX: &str = "log_line_prefix";
pub const LOG_DIRECTORY: &str = "log_directory";
pub const LOG_MIN_MESSAGES: &str = "log_min_messages";
pub const LOG_FILENAME: &str = "log_filename";
pub const LOG_TRUNCATE_ON_ROTATION: &str = "log_truncate_on_rotation";
pub const LOG_ROTATION_AGE: &str = "log_rotation_age";

/// The only numeric member of a detail object.
pub const LOG_ROTATION_SIZE: &str = "log_rotation_size";
