//! URL shortening and resolution service.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::domain::resolver::HostResolver;
use crate::error::AppError;
use crate::utils::url_validator::{HostCheck, validate_url};

/// Service for registering and resolving short URLs.
///
/// Validates submitted URLs (shape plus DNS resolution of the hostname) and
/// delegates the idempotent id allocation to the repository.
pub struct ShortenerService<S: ShortUrlRepository> {
    repository: Arc<S>,
    resolver: Arc<dyn HostResolver>,
}

impl<S: ShortUrlRepository> ShortenerService<S> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<S>, resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Registers `raw_url` and returns its short entry.
    ///
    /// # Validation
    ///
    /// - Must match `^https?://.+`
    /// - Unless it targets `localhost` or an IP literal, the hostname must resolve
    ///
    /// A URL that was registered before keeps its original identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for malformed or unresolvable URLs.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortUrl, AppError> {
        match validate_url(raw_url) {
            Ok(HostCheck::Resolve(host)) => {
                if let Err(e) = self.resolver.resolve(&host).await {
                    warn!("Rejected URL {}: {}", raw_url, e);
                    return Err(AppError::InvalidUrl);
                }
            }
            Ok(HostCheck::Skip) | Ok(HostCheck::IpLiteral) => {}
            Err(e) => {
                debug!("Rejected URL {:?}: {}", raw_url, e);
                return Err(AppError::InvalidUrl);
            }
        }

        self.repository.get_or_create(raw_url).await
    }

    /// Resolves a short identifier back to its entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidShortUrl`] if the identifier was never issued.
    pub async fn resolve(&self, id: &str) -> Result<ShortUrl, AppError> {
        if id.is_empty() {
            return Err(AppError::InvalidShortUrl);
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::InvalidShortUrl)
    }
}
