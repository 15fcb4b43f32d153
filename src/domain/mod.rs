//! Domain layer containing business entities and contracts.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic is encapsulated in services (see
//! [`crate::application::services`]).
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - Hostname resolution contract

pub mod entities;
pub mod repositories;
pub mod resolver;
