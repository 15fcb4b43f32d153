//! In-memory repository implementations.
//!
//! All state is process-wide and lost on restart. Each store guards its data
//! with a `tokio::sync::RwLock`.
//!
//! # Repositories
//!
//! - [`MemoryShortUrlRepository`] - Short URL registration and lookup
//! - [`MemoryUserRepository`] - Exercise tracker users
//! - [`MemoryExerciseRepository`] - Per-user exercise logs

pub mod memory_exercise_repository;
pub mod memory_short_url_repository;
pub mod memory_user_repository;

pub use memory_exercise_repository::MemoryExerciseRepository;
pub use memory_short_url_repository::MemoryShortUrlRepository;
pub use memory_user_repository::MemoryUserRepository;
