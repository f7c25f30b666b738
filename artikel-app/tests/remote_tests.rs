use artikel_app::api::routes::AppState;
use artikel_app::api::server::router;
use artikel_app::sources::{FileWordSource, PixabayClient, RemoteSource};
use artikel_core::{
    Article, CoreError, ImageSource, NoImages, ProgressStore, SessionController, SessionState,
    StaticWordSource, WordSource,
};
use artikel_json::JsonProgressStore;
use std::sync::Arc;
use std::time::Duration;

mod common;

async fn remote_with_images() -> (RemoteSource, common::Seen) {
    let (provider, seen) = common::spawn_fake_provider().await;
    let state = AppState {
        words: Arc::new(StaticWordSource::from_text("das,Buch,book\n")),
        images: Arc::new(PixabayClient::new(common::pixabay_config(
            &provider,
            Some("secret"),
        ))),
    };
    let base = common::spawn(router(state)).await;
    (RemoteSource::new(format!("{base}/"), Duration::from_secs(5)), seen)
}

#[tokio::test]
async fn remote_draws_cards_from_server() {
    let (remote, _) = remote_with_images().await;
    let card = remote.draw().await.unwrap();
    assert_eq!(card.article, Article::Das);
    assert_eq!(card.word, "Buch");
    assert_eq!(card.translation, "book");
}

#[tokio::test]
async fn remote_maps_image_statuses() {
    let (remote, seen) = remote_with_images().await;

    let found = remote.search("Buch", 20).await.unwrap();
    assert_eq!(found.hits.len(), 2);
    assert_eq!(seen.lock()[0]["per_page"], "20");

    assert_eq!(remote.search("nothing", 20).await, Err(CoreError::NoResults));
    assert!(matches!(
        remote.search("boom", 20).await,
        Err(CoreError::SourceUnavailable(_))
    ));
    assert!(matches!(
        remote.search("   ", 20).await,
        Err(CoreError::InvalidQuery(_))
    ));
    assert_eq!(seen.lock().len(), 3);
}

#[tokio::test]
async fn server_without_key_reports_misconfigured() {
    let (provider, seen) = common::spawn_fake_provider().await;
    let state = AppState {
        words: Arc::new(StaticWordSource::from_text("das,Buch,book\n")),
        images: Arc::new(PixabayClient::new(common::pixabay_config(&provider, None))),
    };
    let base = common::spawn(router(state)).await;
    let remote = RemoteSource::new(base, Duration::from_secs(5));
    assert!(matches!(
        remote.search("Buch", 20).await,
        Err(CoreError::Misconfigured(_))
    ));
    assert!(seen.lock().is_empty());
}

#[tokio::test]
async fn remote_server_failure_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState {
        words: Arc::new(FileWordSource::new(dir.path().join("absent.txt"))),
        images: Arc::new(NoImages),
    };
    let base = common::spawn(router(state)).await;
    let remote = RemoteSource::new(base, Duration::from_secs(5));
    match remote.draw().await {
        Err(CoreError::SourceUnavailable(reason)) => {
            assert!(reason.contains("Failed to get flashcard"))
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let remote = RemoteSource::new("http://127.0.0.1:9", Duration::from_secs(2));
    assert!(matches!(
        remote.draw().await,
        Err(CoreError::SourceUnavailable(_))
    ));
}

#[tokio::test]
async fn session_plays_against_a_running_server() {
    let (remote, _) = remote_with_images().await;
    let remote = Arc::new(remote);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.json");
    let store = Arc::new(JsonProgressStore::open_with(path.clone()).unwrap());

    let words: Arc<dyn WordSource> = remote.clone();
    let images: Arc<dyn ImageSource> = remote.clone();
    let mut session = SessionController::new(words, images, store.clone()).await;
    session.load_round().await;

    let card = session.current_card().cloned().unwrap();
    assert_eq!(card.card.word, "Buch");
    assert_eq!(
        card.image_url.as_deref(),
        Some("https://cdn.example/1_640.jpg")
    );

    let out = session.answer(Article::Das).await.unwrap();
    assert!(out.was_correct);
    assert_eq!(out.feedback, "Correct! \"das Buch\" is right!");
    assert!(matches!(
        session.state(),
        SessionState::Answered { was_correct: true, .. }
    ));

    let reopened = JsonProgressStore::open_with(path).unwrap();
    assert!(reopened.load().await.unwrap().contains("Buch"));
}

#[tokio::test]
async fn file_source_draws_the_only_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_dataset(dir.path(), "# nouns\nder,Tisch,table\n,,\n");
    let source = FileWordSource::new(path);
    for _ in 0..5 {
        let card = source.draw().await.unwrap();
        assert_eq!(card.with_article(), "der Tisch");
    }
}

#[tokio::test]
async fn file_source_without_entries_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_dataset(dir.path(), "nothing useful here\n");
    let source = FileWordSource::new(path);
    assert!(matches!(
        source.draw().await,
        Err(CoreError::SourceUnavailable(_))
    ));
}
