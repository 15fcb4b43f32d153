//! DTOs for the URL shortener endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortUrl;

/// Form body of `POST /api/shorturl`.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: String,
}

impl From<ShortUrl> for ShortenResponse {
    fn from(short: ShortUrl) -> Self {
        Self {
            original_url: short.original_url,
            short_url: short.id,
        }
    }
}
