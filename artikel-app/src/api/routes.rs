use axum::{
    extract::{Query, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use artikel_core::{ImageSource, WordCard, WordSource};

use crate::api::dto::{parse_per_page, ApiError, HealthOut, ImagesQuery};

/// Intermediaries may keep image results this long.
pub const IMAGE_CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Clone)]
pub struct AppState {
    pub words: Arc<dyn WordSource>,
    pub images: Arc<dyn ImageSource>,
}

pub async fn flashcard(State(st): State<Arc<AppState>>) -> Result<Json<WordCard>, ApiError> {
    st.words
        .draw()
        .await
        .map(Json)
        .map_err(ApiError::from_word_error)
}

pub async fn images(
    State(st): State<Arc<AppState>>,
    Query(q): Query<ImagesQuery>,
) -> Result<Response, ApiError> {
    let per_page = parse_per_page(q.per_page.as_deref())?;
    let term = q.q.as_deref().unwrap_or_default();
    let found = st
        .images
        .search(term, per_page)
        .await
        .map_err(ApiError::from_image_error)?;
    Ok(([(CACHE_CONTROL, IMAGE_CACHE_CONTROL)], Json(found)).into_response())
}

pub async fn health() -> Json<HealthOut> {
    Json(HealthOut { status: "ok" })
}
