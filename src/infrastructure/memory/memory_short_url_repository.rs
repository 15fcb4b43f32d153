//! In-memory implementation of the short URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::ShortUrlRepository;
use crate::error::AppError;
use crate::utils::id_generator::short_id_from_counter;

#[derive(Default)]
struct ShortUrlTable {
    counter: u64,
    by_id: HashMap<String, String>,
    by_url: HashMap<String, String>,
}

/// Process-wide short URL store.
///
/// Both directions of the mapping and the allocation counter live behind a
/// single lock, so lookup-or-allocate is atomic.
#[derive(Default)]
pub struct MemoryShortUrlRepository {
    table: RwLock<ShortUrlTable>,
}

impl MemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn get_or_create(&self, original_url: &str) -> Result<ShortUrl, AppError> {
        let mut table = self.table.write().await;

        if let Some(id) = table.by_url.get(original_url) {
            return Ok(ShortUrl::new(id.clone(), original_url.to_string()));
        }

        table.counter = table
            .counter
            .checked_add(1)
            .ok_or_else(|| AppError::internal("Short URL counter exhausted"))?;
        let id = short_id_from_counter(table.counter);

        table.by_id.insert(id.clone(), original_url.to_string());
        table.by_url.insert(original_url.to_string(), id.clone());
        debug!("Registered short URL {} -> {}", id, original_url);

        Ok(ShortUrl::new(id, original_url.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, AppError> {
        let table = self.table.read().await;

        Ok(table
            .by_id
            .get(id)
            .map(|url| ShortUrl::new(id.to_string(), url.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sequential_hex_ids() {
        let repo = MemoryShortUrlRepository::new();

        let first = repo.get_or_create("https://a.example").await.unwrap();
        let second = repo.get_or_create("https://b.example").await.unwrap();

        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[tokio::test]
    async fn test_same_url_keeps_id() {
        let repo = MemoryShortUrlRepository::new();

        let first = repo.get_or_create("https://a.example").await.unwrap();
        let again = repo.get_or_create("https://a.example").await.unwrap();

        assert_eq!(first.id, again.id);
        assert!(repo.find_by_id("2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_roll_into_hex_digits() {
        let repo = MemoryShortUrlRepository::new();

        let mut last = None;
        for i in 0..10 {
            last = Some(
                repo.get_or_create(&format!("https://{}.example", i))
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(last.unwrap().id, "a");
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = MemoryShortUrlRepository::new();
        repo.get_or_create("https://a.example").await.unwrap();

        let found = repo.find_by_id("1").await.unwrap();
        assert_eq!(found.unwrap().original_url, "https://a.example");

        assert!(repo.find_by_id("2").await.unwrap().is_none());
        assert!(repo.find_by_id("").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registration_is_consistent() {
        let repo = Arc::new(MemoryShortUrlRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.get_or_create(&format!("https://{}.example", i % 5))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(repo.find_by_id("5").await.unwrap().is_some());
        assert!(repo.find_by_id("6").await.unwrap().is_none());
        for i in 0..5 {
            let entry = repo
                .get_or_create(&format!("https://{}.example", i))
                .await
                .unwrap();
            let found = repo.find_by_id(&entry.id).await.unwrap().unwrap();
            assert_eq!(found.original_url, format!("https://{}.example", i));
        }
    }
}
