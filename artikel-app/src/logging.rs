use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the background log writer alive; flushes on drop.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Logs to stderr so stdout stays free for command output and prompts.
pub fn init_stderr(log_level: &str) {
    let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
    let _ = tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(layer)
        .try_init();
}

/// Logs to `<log_dir>/artikel.log` for the terminal UI, which owns the screen.
/// Returns `None` (and logs nowhere) if the directory cannot be created.
pub fn init_file(log_level: &str, log_dir: &Path) -> Option<FileLogGuard> {
    if let Err(err) = std::fs::create_dir_all(log_dir) {
        eprintln!("failed to create log directory {}: {err}", log_dir.display());
        return None;
    }
    let appender = tracing_appender::rolling::never(log_dir, "artikel.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    let _ = tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(layer)
        .try_init();
    Some(FileLogGuard { _guard: guard })
}
