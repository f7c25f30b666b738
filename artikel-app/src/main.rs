use anyhow::Result;
use artikel_app::cli::commands::{open_session_parts, run_cli};
use artikel_app::cli::opts::{Cli, Command};
use artikel_app::config::AppConfig;
use artikel_app::logging;
use artikel_app::tui::app::TuiApp;
use clap::Parser; // needed for Cli::parse()
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // .env is optional; real environment variables win.
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    let cfg = AppConfig::from_cli(&args);

    match &args.cmd {
        // Run TUI on its own thread/runtime (no nested Tokio); logs go to a file
        Command::Tui => {
            let _guard = logging::init_file(&cfg.log_level, &cfg.log_dir);
            let rt = Arc::new(Runtime::new()?);
            let parts = rt.block_on(open_session_parts(&cfg))?;
            let mut app = TuiApp::new(parts, rt);
            app.run()
        }
        // Everything else uses a single runtime here
        _ => {
            logging::init_stderr(&cfg.log_level);
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args, cfg))
        }
    }
}
