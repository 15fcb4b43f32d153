//! Repository trait for short URL data access.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the bidirectional short id ↔ URL mapping.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryShortUrlRepository`] - Process-wide in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Returns the entry for `original_url`, registering it first if needed.
    ///
    /// Lookup and allocation happen atomically: concurrent calls with the same
    /// URL observe a single identifier, and identifiers are allocated from a
    /// monotonically increasing counter starting at 1.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot allocate an identifier.
    async fn get_or_create(&self, original_url: &str) -> Result<ShortUrl, AppError>;

    /// Finds an entry by its short identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError>;
}
