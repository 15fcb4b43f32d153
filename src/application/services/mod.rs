//! Business logic services for the application layer.

pub mod exercise_service;
pub mod shortener_service;
pub mod timestamp_service;

pub use exercise_service::ExerciseService;
pub use shortener_service::ShortenerService;
pub use timestamp_service::TimestampService;
