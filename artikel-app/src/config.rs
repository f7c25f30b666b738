use crate::cli::opts::{Cli, StoreKind};
use artikel_json::paths;
use std::path::PathBuf;
use std::time::Duration;

/// Resolved runtime settings. Flags and environment are merged by clap;
/// this fills in data-dir defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreKind,
    pub progress_path: PathBuf,
    pub db_path: PathBuf,
    pub dataset: PathBuf,
    pub pixabay: PixabayConfig,
    pub image_cache_ttl: Duration,
    pub images_enabled: bool,
    pub server: Option<String>,
    pub http_timeout: Duration,
    pub log_level: String,
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PixabayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let http_timeout = Duration::from_secs(cli.http_timeout_secs.max(1));
        Self {
            store: cli.store,
            progress_path: cli
                .progress_path
                .clone()
                .unwrap_or_else(paths::default_progress_file),
            db_path: cli.db_path.clone().unwrap_or_else(paths::default_sqlite_file),
            dataset: cli.dataset.clone(),
            pixabay: PixabayConfig {
                api_key: cli
                    .pixabay_key
                    .clone()
                    .filter(|k| !k.trim().is_empty()),
                base_url: cli.pixabay_url.clone(),
                timeout: http_timeout,
            },
            image_cache_ttl: Duration::from_secs(cli.image_cache_secs),
            images_enabled: !cli.no_images,
            server: cli
                .server
                .clone()
                .map(|s| s.trim_end_matches('/').to_string())
                .filter(|s| !s.is_empty()),
            http_timeout,
            log_level: cli.log_level.clone(),
            log_dir: paths::default_log_dir(),
        }
    }
}
