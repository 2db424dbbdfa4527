pub mod format;
pub use format::TraceFormat;

pub mod filter;
pub use filter::TraceFilter;

pub mod rfc3339;
pub use rfc3339::TraceRfc3339;
