use artikel_core::{ProgressSet, ProgressStore};
use artikel_sqlite::{SqliteProgressStore, PROGRESS_ENTRY};

#[tokio::test]
async fn empty_database_loads_empty() {
    let store = SqliteProgressStore::open_memory().await.unwrap();
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_overwrites_previous_entry() {
    let store = SqliteProgressStore::open_memory().await.unwrap();
    store
        .save(&["Tisch", "Lampe"].into_iter().collect())
        .await
        .unwrap();
    let only_buch: ProgressSet = ["Buch"].into_iter().collect();
    store.save(&only_buch).await.unwrap();
    assert_eq!(store.load().await.unwrap(), only_buch);
}

#[tokio::test]
async fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.sqlite3");
    {
        let store = SqliteProgressStore::open_file(&path).await.unwrap();
        store.save(&["Hund"].into_iter().collect()).await.unwrap();
        store.save(&ProgressSet::new()).await.unwrap();
        store.save(&["Katze"].into_iter().collect()).await.unwrap();
    }
    let store = SqliteProgressStore::open_file(&path).await.unwrap();
    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.contains("Katze"));
}

#[tokio::test]
async fn corrupt_entry_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("progress.sqlite3");
    let store = SqliteProgressStore::open_file(&path).await.unwrap();
    store.save(&["Hund"].into_iter().collect()).await.unwrap();
    drop(store);

    let opts = sqlx::sqlite::SqliteConnectOptions::new().filename(&path);
    let pool = sqlx::SqlitePool::connect_with(opts).await.unwrap();
    sqlx::query("UPDATE progress_entries SET value='oops' WHERE name=?")
        .bind(PROGRESS_ENTRY)
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let store = SqliteProgressStore::open_file(&path).await.unwrap();
    assert!(store.load().await.unwrap().is_empty());
}
