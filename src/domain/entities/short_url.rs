//! Short URL entity mapping a sequential identifier to an original URL.

/// A registered short URL.
///
/// The mapping is bidirectional: each distinct `original_url` owns exactly
/// one `id` and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
}

impl ShortUrl {
    pub fn new(id: String, original_url: String) -> Self {
        Self { id, original_url }
    }
}
