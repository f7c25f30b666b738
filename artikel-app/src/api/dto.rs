use artikel_core::CoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

pub const QUERY_REQUIRED: &str = "Search query is required";
pub const NO_IMAGES: &str = "No images found";
pub const KEY_NOT_CONFIGURED: &str = "API key not configured";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Raw query; `per_page` is parsed by hand so a bad value gets our error body.
#[derive(Debug, Default, Deserialize)]
pub struct ImagesQuery {
    pub q: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthOut {
    pub status: &'static str,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn from_word_error(err: CoreError) -> Self {
        error!(error = %err, "error reading flashcard");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to get flashcard")
    }

    pub fn from_image_error(err: CoreError) -> Self {
        match err {
            CoreError::InvalidQuery(_) => {
                Self::new(StatusCode::BAD_REQUEST, QUERY_REQUIRED)
            }
            CoreError::NoResults => Self::new(StatusCode::NOT_FOUND, NO_IMAGES),
            CoreError::Misconfigured(_) => {
                error!(error = %err, "image search misconfigured");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, KEY_NOT_CONFIGURED)
            }
            other => {
                error!(error = %other, "error fetching images");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch images")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// A bad `per_page` is reported like a bad query.
pub fn parse_per_page(raw: Option<&str>) -> Result<u32, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(artikel_core::DEFAULT_IMAGE_LIMIT),
        Some(s) => s
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ApiError::new(StatusCode::BAD_REQUEST, QUERY_REQUIRED)),
    }
}
