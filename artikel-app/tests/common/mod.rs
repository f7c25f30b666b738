#![allow(dead_code)]

use artikel_app::config::PixabayConfig;
use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn provider_hit(id: u64, word: &str) -> Value {
    json!({
        "id": id,
        "pageURL": format!("https://pixabay.example/photos/{word}-{id}/"),
        "type": "photo",
        "tags": format!("{word}, furniture"),
        "previewURL": format!("https://cdn.example/{id}_150.jpg"),
        "previewWidth": 150,
        "previewHeight": 99,
        "webformatURL": format!("https://cdn.example/{id}_640.jpg"),
        "webformatWidth": 640,
        "webformatHeight": 426,
        "largeImageURL": format!("https://cdn.example/{id}_1280.jpg"),
        "imageWidth": 4000,
        "imageHeight": 2667,
        "imageSize": 1234567,
        "views": 100,
        "downloads": 50,
        "collections": 3,
        "likes": 7,
        "comments": 1,
        "user_id": 42,
        "user": "anna",
        "userImageURL": "https://cdn.example/user.jpg"
    })
}

/// Stand-in for the image provider. `q=nothing` has no hits, `q=boom`
/// fails upstream; anything else returns two hits.
pub async fn spawn_fake_provider() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let log = seen.clone();
    let app = Router::new().route(
        "/api/",
        get(move |Query(q): Query<HashMap<String, String>>| {
            let log = log.clone();
            async move {
                log.lock().push(q.clone());
                match q.get("q").map(String::as_str) {
                    Some("boom") => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({ "error": "upstream down" })),
                    ),
                    Some("nothing") => (
                        StatusCode::OK,
                        Json(json!({ "total": 0, "totalHits": 0, "hits": [] })),
                    ),
                    Some(word) => (
                        StatusCode::OK,
                        Json(json!({
                            "total": 2,
                            "totalHits": 2,
                            "hits": [provider_hit(1, word), provider_hit(2, word)]
                        })),
                    ),
                    None => (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": "missing q" })),
                    ),
                }
            }
        }),
    );
    let base = spawn(app).await;
    (format!("{base}/api/"), seen)
}

pub fn pixabay_config(base_url: &str, key: Option<&str>) -> PixabayConfig {
    PixabayConfig {
        api_key: key.map(str::to_string),
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    }
}

pub fn write_dataset(dir: &std::path::Path, text: &str) -> std::path::PathBuf {
    let path = dir.join("nouns.txt");
    std::fs::write(&path, text).unwrap();
    path
}
