//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. The
//! in-memory implementations live in `crate::infrastructure::memory`; mock
//! implementations are generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ShortUrlRepository`] - Short URL registration and lookup
//! - [`UserRepository`] - Exercise tracker users
//! - [`ExerciseRepository`] - Per-user exercise logs

pub mod exercise_repository;
pub mod short_url_repository;
pub mod user_repository;

pub use exercise_repository::ExerciseRepository;
pub use short_url_repository::ShortUrlRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use exercise_repository::MockExerciseRepository;
#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
