//! Infrastructure layer for storage and external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`dns`] - Hostname resolution (system resolver and static table)
//! - [`memory`] - In-memory repository implementations

pub mod dns;
pub mod memory;
