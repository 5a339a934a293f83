//! Build-time information reported by the health endpoint.

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name, used in startup logs.
pub const NAME: &str = env!("CARGO_PKG_NAME");
