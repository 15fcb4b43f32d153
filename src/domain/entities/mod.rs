//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation inputs use separate structs:
//! - `NewUser`, `NewExercise` - For creating new records
//!
//! # Entity Types
//!
//! - [`ShortUrl`] - A short identifier mapped to an original URL
//! - [`User`] - An exercise tracker user
//! - [`Exercise`] - A logged exercise, plus the [`LogFilter`] used to query logs
//! - [`Timestamp`] - A parsed point in time

pub mod exercise;
pub mod short_url;
pub mod timestamp;
pub mod user;

pub use exercise::{Exercise, LogFilter, NewExercise};
pub use short_url::ShortUrl;
pub use timestamp::Timestamp;
pub use user::{NewUser, User};
