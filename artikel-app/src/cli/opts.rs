use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Json,
    Sqlite,
    /// Nothing survives the process; handy for a quick try.
    Memory,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "artikel", version, about = "German article flashcards: CLI/TUI/API")]
pub struct Cli {
    /// Progress backend
    #[arg(long, value_enum, default_value_t = StoreKind::Json, global = true)]
    pub store: StoreKind,

    /// Progress file when --store json (defaults to app data dir)
    #[arg(long, global = true)]
    pub progress_path: Option<PathBuf>,

    /// SQLite DB path when --store sqlite (defaults to app data dir)
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    /// Noun dataset, one `article,word,translation` per line
    #[arg(long, env = "ARTIKEL_DATASET", default_value = "data/german_nouns.txt", global = true)]
    pub dataset: PathBuf,

    /// Pixabay API key; without it image lookups are disabled
    #[arg(long, env = "PIXABAY_API_KEY", hide_env_values = true, global = true)]
    pub pixabay_key: Option<String>,

    #[arg(long, env = "PIXABAY_BASE_URL", default_value = "https://pixabay.com/api/", global = true)]
    pub pixabay_url: String,

    /// Timeout for outbound HTTP requests
    #[arg(long, default_value_t = 10, global = true)]
    pub http_timeout_secs: u64,

    /// How long image search results are reused
    #[arg(long, default_value_t = 3600, global = true)]
    pub image_cache_secs: u64,

    /// Skip image lookups entirely
    #[arg(long, global = true)]
    pub no_images: bool,

    /// Use a running `artikel serve` for words and images instead of local sources
    #[arg(long, env = "ARTIKEL_SERVER", global = true)]
    pub server: Option<String>,

    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Serve the word and image endpoints over HTTP
    Serve(ServeCmd),
    /// Launch Terminal UI
    Tui,
    /// Line-by-line quiz on the terminal
    Quiz,
    /// Print one random card
    Draw,
    /// Search images for a term
    Images(ImagesCmd),
    /// Inspect or manage saved progress
    #[command(subcommand)]
    Progress(ProgressCmd),
}

#[derive(Debug, Args, Clone)]
pub struct ServeCmd {
    /// Bind address (host:port)
    #[arg(long, env = "ARTIKEL_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: String,
}

#[derive(Debug, Args, Clone)]
pub struct ImagesCmd {
    pub term: String,
    #[arg(long, default_value_t = artikel_core::DEFAULT_IMAGE_LIMIT)]
    pub per_page: u32,
}

#[derive(Debug, Subcommand, Clone)]
pub enum ProgressCmd {
    Show,
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    Export { path: PathBuf },
    /// Replace saved progress with a JSON list of words
    Import { path: PathBuf },
}
