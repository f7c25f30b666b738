use artikel_core::{parse_dataset, pick_random, CoreError, WordCard, WordSource};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::warn;

/// Draws from a dataset file, re-read on every call so edits show up
/// without a restart.
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn draw_from(path: &Path) -> Result<WordCard, CoreError> {
    let text = fs::read_to_string(path).map_err(|err| {
        warn!(path = %path.display(), error = %err, "cannot read dataset");
        CoreError::unavailable(format!("cannot read dataset: {err}"))
    })?;
    let cards = parse_dataset(&text);
    pick_random(&cards, &mut rand::rng())
        .ok_or_else(|| CoreError::unavailable("dataset has no usable entries"))
}

#[async_trait]
impl WordSource for FileWordSource {
    async fn draw(&self) -> Result<WordCard, CoreError> {
        let path = self.path.clone();
        task::spawn_blocking(move || draw_from(&path))
            .await
            .map_err(|_| CoreError::unavailable("dataset reader stopped"))?
    }
}
