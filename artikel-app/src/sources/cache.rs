use artikel_core::{validate_term, CoreError, ImageSearch, ImageSource};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

type CacheKey = (String, u32);

/// Reuses successful searches for `ttl`. Failures always go back to the
/// inner source.
pub struct CachedImageSource<S> {
    inner: S,
    ttl: Duration,
    entries: Mutex<HashMap<CacheKey, (Instant, ImageSearch)>>,
}

impl<S> CachedImageSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: &CacheKey) -> Option<ImageSearch> {
        let mut m = self.entries.lock();
        let fresh = m
            .get(key)
            .filter(|(at, _)| at.elapsed() < self.ttl)
            .map(|(_, found)| found.clone());
        if fresh.is_none() {
            m.remove(key);
        }
        fresh
    }

    fn store(&self, key: CacheKey, found: ImageSearch) {
        let mut m = self.entries.lock();
        let ttl = self.ttl;
        m.retain(|_, (at, _)| at.elapsed() < ttl);
        m.insert(key, (Instant::now(), found));
    }
}

#[async_trait]
impl<S: ImageSource> ImageSource for CachedImageSource<S> {
    async fn search(&self, term: &str, limit: u32) -> Result<ImageSearch, CoreError> {
        let key = (validate_term(term)?.to_string(), limit);
        if let Some(found) = self.lookup(&key) {
            debug!(term = %key.0, "image cache hit");
            return Ok(found);
        }
        let found = self.inner.search(&key.0, limit).await?;
        if !self.ttl.is_zero() {
            self.store(key, found.clone());
        }
        Ok(found)
    }
}
