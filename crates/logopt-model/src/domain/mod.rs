mod options;
pub use options::LogOptions;

mod details;
pub use details::OptionDetails;

pub mod fields;
