use crate::api::routes::AppState;
use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::config::AppConfig;
use crate::sources::{CachedImageSource, FileWordSource, PixabayClient, RemoteSource};

use anyhow::{bail, Context, Result};
use artikel_core::{
    enrich, Article, EnrichedCard, ImageSource, MemoryProgressStore, NoImages, ProgressSet,
    ProgressStore, SessionController, SessionState, WordSource,
};
use artikel_json::JsonProgressStore;
use artikel_sqlite::SqliteProgressStore;
use std::io::{stdin, stdout, Write};
use std::sync::Arc;
use tracing::{info, warn};

/// Everything a session controller needs, wired from config.
pub struct SessionParts {
    pub words: Arc<dyn WordSource>,
    pub images: Arc<dyn ImageSource>,
    pub store: Arc<dyn ProgressStore>,
}

pub async fn run_cli(args: Cli, cfg: AppConfig) -> Result<()> {
    match args.cmd {
        Command::Serve(cmd) => {
            let addr: std::net::SocketAddr = cmd.addr.parse().context("invalid --addr")?;
            let state = AppState {
                words: Arc::new(FileWordSource::new(cfg.dataset.clone())),
                images: local_images(&cfg),
            };
            api_server::run(state, addr).await
        }
        Command::Tui => bail!("the terminal UI is started from main"),
        Command::Quiz => {
            let parts = open_session_parts(&cfg).await?;
            quiz_cmd(parts).await
        }
        Command::Draw => {
            let (words, images) = build_sources(&cfg);
            draw_cmd(&*words, &*images).await
        }
        Command::Images(cmd) => {
            let (_, images) = build_sources(&cfg);
            images_cmd(&*images, cmd).await
        }
        Command::Progress(cmd) => {
            let store = open_store(&cfg).await?;
            progress_cmd(&*store, cmd).await
        }
    }
}

pub async fn open_session_parts(cfg: &AppConfig) -> Result<SessionParts> {
    let (words, images) = build_sources(cfg);
    let store = open_store(cfg).await?;
    Ok(SessionParts {
        words,
        images,
        store,
    })
}

/// Remote endpoints when `--server` is given, local dataset and Pixabay
/// otherwise.
pub fn build_sources(cfg: &AppConfig) -> (Arc<dyn WordSource>, Arc<dyn ImageSource>) {
    if let Some(server) = &cfg.server {
        info!(server = %server, "using remote word and image endpoints");
        let remote = Arc::new(RemoteSource::new(server.clone(), cfg.http_timeout));
        let words: Arc<dyn WordSource> = remote.clone();
        let images: Arc<dyn ImageSource> = if cfg.images_enabled {
            remote.clone()
        } else {
            Arc::new(NoImages)
        };
        return (words, images);
    }
    let words: Arc<dyn WordSource> = Arc::new(FileWordSource::new(cfg.dataset.clone()));
    (words, local_images(cfg))
}

pub fn local_images(cfg: &AppConfig) -> Arc<dyn ImageSource> {
    if !cfg.images_enabled {
        return Arc::new(NoImages);
    }
    let client = PixabayClient::new(cfg.pixabay.clone());
    if !client.is_configured() {
        warn!("PIXABAY_API_KEY is not set; cards will have no images");
    }
    Arc::new(CachedImageSource::new(client, cfg.image_cache_ttl))
}

pub async fn open_store(cfg: &AppConfig) -> Result<Arc<dyn ProgressStore>> {
    match cfg.store {
        StoreKind::Json => {
            let s = JsonProgressStore::open_with(cfg.progress_path.clone())?;
            Ok(Arc::new(s))
        }
        StoreKind::Sqlite => {
            if let Some(parent) = cfg.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("cannot create database directory {}", parent.display())
                })?;
            }
            let s = SqliteProgressStore::open_file(&cfg.db_path).await?;
            Ok(Arc::new(s))
        }
        StoreKind::Memory => Ok(Arc::new(MemoryProgressStore::new())),
    }
}

async fn draw_cmd(words: &dyn WordSource, images: &dyn ImageSource) -> Result<()> {
    let card = words.draw().await?;
    let card = enrich(card, images).await;
    print_card(&card);
    Ok(())
}

async fn images_cmd(images: &dyn ImageSource, cmd: ImagesCmd) -> Result<()> {
    let found = images.search(&cmd.term, cmd.per_page).await?;
    println!("total={} total_hits={}", found.total, found.total_hits);
    for h in found.hits {
        println!(
            "{}\t{}x{}\t{}\t{}",
            h.id, h.webformat_width, h.webformat_height, h.webformat_url, h.tags
        );
    }
    Ok(())
}

async fn progress_cmd(store: &dyn ProgressStore, cmd: ProgressCmd) -> Result<()> {
    match cmd {
        ProgressCmd::Show => {
            let p = store.load().await?;
            println!("{} word(s) answered correctly", p.len());
            for w in p.iter() {
                println!("{w}");
            }
        }
        ProgressCmd::Reset { yes } => {
            if !yes && !confirm("Are you sure you want to reset your progress? [y/N] ")? {
                println!("cancelled");
                return Ok(());
            }
            store.save(&ProgressSet::new()).await?;
            println!("ok");
        }
        ProgressCmd::Export { path } => {
            let p = store.load().await?;
            let words: Vec<&str> = p.iter().collect();
            std::fs::write(&path, serde_json::to_string_pretty(&words)?)?;
            println!("wrote {}", path.display());
        }
        ProgressCmd::Import { path } => {
            let data = std::fs::read_to_string(&path)?;
            let words: Vec<String> =
                serde_json::from_str(&data).context("expected a JSON list of words")?;
            let p: ProgressSet = words.into_iter().collect();
            store.save(&p).await?;
            println!("imported {} word(s)", p.len());
        }
    }
    Ok(())
}

/// What the user typed at a quiz prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Article(Article),
    Continue,
    Reset,
    Quit,
    Unknown,
}

pub fn parse_choice(line: &str) -> Choice {
    match line.trim().to_lowercase().as_str() {
        "1" | "der" => Choice::Article(Article::Der),
        "2" | "die" => Choice::Article(Article::Die),
        "3" | "das" => Choice::Article(Article::Das),
        "" | "n" | "next" => Choice::Continue,
        "r" | "reset" => Choice::Reset,
        "q" | "quit" => Choice::Quit,
        _ => Choice::Unknown,
    }
}

async fn quiz_cmd(parts: SessionParts) -> Result<()> {
    let mut session = SessionController::new(parts.words, parts.images, parts.store).await;
    println!("{} word(s) learned so far", session.progress().len());
    session.load_round().await;

    loop {
        let state = session.state().clone();
        match state {
            SessionState::Loading => {
                session.load_round().await;
            }
            SessionState::LoadFailed { reason } => {
                println!("could not load a card: {reason}");
                let Some(line) = read_line("[enter=retry, q=quit] ")? else { break };
                if parse_choice(&line) == Choice::Quit {
                    break;
                }
                if let Some(req) = session.retry() {
                    let outcome = req.fetch().await;
                    session.apply(outcome);
                }
            }
            SessionState::Ready(card) => {
                print_card(&card);
                println!("[1=der, 2=die, 3=das, r=reset, q=quit]");
                let Some(line) = read_line("article> ")? else { break };
                match parse_choice(&line) {
                    Choice::Article(a) => {
                        if let Some(out) = session.answer(a).await {
                            println!("{}", out.feedback);
                        }
                    }
                    Choice::Reset => reset_session(&mut session).await?,
                    Choice::Quit => break,
                    Choice::Continue | Choice::Unknown => {
                        println!("enter der/die/das or 1/2/3");
                    }
                }
            }
            SessionState::Answered { .. } => {
                let Some(line) = read_line("[enter=next, r=reset, q=quit] ")? else { break };
                match parse_choice(&line) {
                    Choice::Quit => break,
                    Choice::Reset => reset_session(&mut session).await?,
                    _ => {
                        if let Some(req) = session.next() {
                            let outcome = req.fetch().await;
                            session.apply(outcome);
                        }
                    }
                }
            }
        }
    }

    let t = session.tally();
    println!(
        "\nanswered {}, correct {} ({:.0}%), {} word(s) learned in total",
        t.answered,
        t.correct,
        t.accuracy() * 100.0,
        session.progress().len()
    );
    Ok(())
}

async fn reset_session(session: &mut SessionController) -> Result<()> {
    if confirm("Are you sure you want to reset your progress? [y/N] ")? {
        if session.reset_progress().await {
            println!("progress reset");
        }
    }
    Ok(())
}

fn print_card(card: &EnrichedCard) {
    println!("\n{}  ({})", card.card.word, card.card.translation);
    if let Some(url) = &card.image_url {
        println!("image: {url}");
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    let answer = read_line(prompt)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// `None` once stdin is closed.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    stdout().flush().ok();
    let mut s = String::new();
    let n = stdin().read_line(&mut s)?;
    Ok((n > 0).then_some(s))
}
