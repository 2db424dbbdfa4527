mod domain;
pub use domain::{LogOptions, OptionDetails, fields};

mod error;
pub use error::{ModelError, ModelResult};

mod detail;
pub use detail::OptionDetail;

mod config;
pub use config::LogConfig;

mod value;
pub use value::{MinMessages, RotationAge, Switch};
