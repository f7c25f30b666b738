use artikel_core::{CoreError, ProgressSet, ProgressStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::task;
use tracing::{debug, warn};

pub mod paths;

const FILE_VERSION: u32 = 1;

#[derive(Clone, Serialize, Deserialize)]
struct FileImage {
    version: u32,
    updated_at: DateTime<Utc>,
    correct_answers: ProgressSet,
}

/// Accepted on-disk forms. A bare list is what a browser export of the
/// progress entry looks like.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Image(FileImage),
    Bare(Vec<String>),
}

impl StoredRecord {
    fn into_progress(self) -> ProgressSet {
        match self {
            StoredRecord::Image(img) => img.correct_answers,
            StoredRecord::Bare(words) => words.into_iter().collect(),
        }
    }
}

/// Progress kept in a single JSON file, replaced atomically on every save.
pub struct JsonProgressStore {
    path: PathBuf,
}

impl JsonProgressStore {
    pub fn open_default() -> Result<Self, CoreError> {
        Self::open_with(paths::default_progress_file())
    }

    pub fn open_with(path: PathBuf) -> Result<Self, CoreError> {
        ensure_parent_dirs(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn ensure_parent_dirs(path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| {
            warn!(path = %parent.display(), error = %err, "cannot create progress directory");
            CoreError::Storage("io")
        })?;
    }
    Ok(())
}

fn read_progress(path: &Path) -> io::Result<ProgressSet> {
    let buf = match fs::read_to_string(path) {
        Ok(buf) => buf,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no progress file yet");
            return Ok(ProgressSet::default());
        }
        Err(err) => return Err(err),
    };
    match serde_json::from_str::<StoredRecord>(&buf) {
        Ok(rec) => Ok(rec.into_progress()),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable progress file, starting empty");
            Ok(ProgressSet::default())
        }
    }
}

fn write_atomic(path: &Path, img: &FileImage) -> io::Result<()> {
    let json = serde_json::to_vec_pretty(img)?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl ProgressStore for JsonProgressStore {
    async fn load(&self) -> Result<ProgressSet, CoreError> {
        let path = self.path.clone();
        task::spawn_blocking(move || read_progress(&path))
            .await
            .map_err(|_| CoreError::Storage("io"))?
            .map_err(|err| {
                warn!(error = %err, "progress read failed");
                CoreError::Storage("io")
            })
    }

    async fn save(&self, progress: &ProgressSet) -> Result<(), CoreError> {
        let img = FileImage {
            version: FILE_VERSION,
            updated_at: Utc::now(),
            correct_answers: progress.clone(),
        };
        let path = self.path.clone();

        // Join error -> CoreError, inner io::Error -> CoreError
        task::spawn_blocking(move || write_atomic(&path, &img))
            .await
            .map_err(|_| CoreError::Storage("io"))?
            .map_err(|err| {
                warn!(error = %err, "progress write failed");
                CoreError::Storage("io")
            })
    }
}
