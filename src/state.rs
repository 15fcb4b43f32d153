//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ExerciseService, ShortenerService, TimestampService};
use crate::domain::resolver::HostResolver;
use crate::infrastructure::memory::{
    MemoryExerciseRepository, MemoryShortUrlRepository, MemoryUserRepository,
};

pub type AppShortenerService = ShortenerService<MemoryShortUrlRepository>;
pub type AppExerciseService = ExerciseService<MemoryUserRepository, MemoryExerciseRepository>;

/// Services and settings shared by every request.
///
/// Each instance owns its own in-memory stores, so a fresh state is fully
/// isolated from any other.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<AppShortenerService>,
    pub timestamp_service: Arc<TimestampService>,
    pub exercise_service: Arc<AppExerciseService>,
    /// When true, client IPs are read from `X-Forwarded-For` / `X-Real-IP`.
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds a state with empty in-memory stores.
    pub fn new(resolver: Arc<dyn HostResolver>, behind_proxy: bool) -> Self {
        let shortener_service = Arc::new(ShortenerService::new(
            Arc::new(MemoryShortUrlRepository::new()),
            resolver,
        ));

        let exercise_service = Arc::new(ExerciseService::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryExerciseRepository::new()),
        ));

        Self {
            shortener_service,
            timestamp_service: Arc::new(TimestampService::new()),
            exercise_service,
            behind_proxy,
        }
    }
}
