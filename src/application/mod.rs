//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls, validation, and business rules, and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - URL shortening and resolution
//! - [`services::timestamp_service::TimestampService`] - Date parameter parsing
//! - [`services::exercise_service::ExerciseService`] - Users and exercise logs

pub mod services;
