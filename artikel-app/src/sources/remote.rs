use crate::api::dto::{ErrorBody, KEY_NOT_CONFIGURED};
use artikel_core::{validate_term, CoreError, ImageSearch, ImageSource, WordCard, WordSource};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::time::Duration;
use tracing::warn;

/// Client for the word and image endpoints of a running `artikel serve`.
#[derive(Clone)]
pub struct RemoteSource {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn error_message(resp: Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => format!("{status}: {}", body.error),
        Err(_) => status.to_string(),
    }
}

#[async_trait]
impl WordSource for RemoteSource {
    async fn draw(&self) -> Result<WordCard, CoreError> {
        let resp = self
            .client
            .get(self.url("/api/flashcard"))
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "word server unreachable");
                CoreError::unavailable(err)
            })?;
        if !resp.status().is_success() {
            return Err(CoreError::unavailable(error_message(resp).await));
        }
        resp.json::<WordCard>()
            .await
            .map_err(|err| CoreError::unavailable(format!("bad card from server: {err}")))
    }
}

#[async_trait]
impl ImageSource for RemoteSource {
    async fn search(&self, term: &str, limit: u32) -> Result<ImageSearch, CoreError> {
        let term = validate_term(term)?;
        let per_page = limit.to_string();
        let resp = self
            .client
            .get(self.url("/api/images"))
            .query(&[("q", term), ("per_page", per_page.as_str())])
            .send()
            .await
            .map_err(CoreError::unavailable)?;
        match resp.status() {
            s if s.is_success() => {
                let found: ImageSearch = resp.json().await.map_err(CoreError::unavailable)?;
                if found.hits.is_empty() {
                    return Err(CoreError::NoResults);
                }
                Ok(found)
            }
            StatusCode::BAD_REQUEST => Err(CoreError::InvalidQuery("rejected by server")),
            StatusCode::NOT_FOUND => Err(CoreError::NoResults),
            status => match resp.json::<ErrorBody>().await {
                Ok(body) if body.error == KEY_NOT_CONFIGURED => {
                    Err(CoreError::Misconfigured("image search key not configured on server"))
                }
                Ok(body) => Err(CoreError::unavailable(format!("{status}: {}", body.error))),
                Err(_) => Err(CoreError::unavailable(status)),
            },
        }
    }
}
