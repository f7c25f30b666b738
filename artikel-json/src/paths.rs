use directories::ProjectDirs;
use std::path::PathBuf;

pub fn data_root() -> PathBuf {
    if let Some(pd) = ProjectDirs::from("com", "artikel", "Artikel") {
        pd.data_dir().to_path_buf()
    } else {
        // Fallback: current dir
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

pub fn default_progress_file() -> PathBuf {
    data_root().join("progress.json")
}

pub fn default_sqlite_file() -> PathBuf {
    data_root().join("progress.sqlite3")
}

pub fn default_log_dir() -> PathBuf {
    data_root().join("logs")
}
