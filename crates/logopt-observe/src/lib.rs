mod tracer;
pub use tracer::*;
