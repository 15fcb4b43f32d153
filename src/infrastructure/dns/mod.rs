//! Hostname resolver implementations.
//!
//! - [`SystemResolver`] - Operating system resolver with a lookup timeout
//! - [`StaticResolver`] - Fixed host table for tests and offline runs

pub mod static_resolver;
pub mod system_resolver;

pub use static_resolver::StaticResolver;
pub use system_resolver::SystemResolver;
