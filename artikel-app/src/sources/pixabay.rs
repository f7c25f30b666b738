use crate::config::PixabayConfig;
use artikel_core::{validate_term, CoreError, ImageSearch, ImageSource};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

/// Range the provider accepts for `per_page`.
pub const MIN_PER_PAGE: u32 = 3;
pub const MAX_PER_PAGE: u32 = 200;

pub fn clamp_per_page(limit: u32) -> u32 {
    limit.clamp(MIN_PER_PAGE, MAX_PER_PAGE)
}

#[derive(Clone)]
pub struct PixabayClient {
    config: PixabayConfig,
    client: reqwest::Client,
}

impl PixabayClient {
    pub fn new(config: PixabayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}

#[async_trait]
impl ImageSource for PixabayClient {
    async fn search(&self, term: &str, limit: u32) -> Result<ImageSearch, CoreError> {
        let term = validate_term(term)?;
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CoreError::Misconfigured("PIXABAY_API_KEY is not set"))?;
        let per_page = clamp_per_page(limit).to_string();

        // errors carry the request URL, which includes the key
        let resp = self
            .client
            .get(&self.config.base_url)
            .header(ACCEPT, "application/json")
            .query(&[
                ("key", key),
                ("q", term),
                ("image_type", "photo"),
                ("per_page", per_page.as_str()),
                ("safesearch", "true"),
            ])
            .send()
            .await
            .map_err(|err| {
                let err = err.without_url();
                warn!(error = %err, "pixabay request failed");
                CoreError::unavailable(err)
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "pixabay returned an error status");
            return Err(CoreError::unavailable(format!("provider returned {status}")));
        }

        let found: ImageSearch = resp.json().await.map_err(|err| {
            let err = err.without_url();
            warn!(error = %err, "pixabay response could not be decoded");
            CoreError::unavailable(err)
        })?;
        debug!(term, hits = found.hits.len(), total = found.total, "pixabay search");

        if found.hits.is_empty() {
            return Err(CoreError::NoResults);
        }
        Ok(found)
    }
}
