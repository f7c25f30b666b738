use artikel_app::cli::commands::{open_store, parse_choice, Choice};
use artikel_app::cli::opts::{Cli, Command, ProgressCmd, StoreKind};
use artikel_app::config::AppConfig;
use artikel_core::Article;
use clap::Parser;
use std::time::Duration;

#[test]
fn quiz_input_maps_to_choices() {
    assert_eq!(parse_choice("1\n"), Choice::Article(Article::Der));
    assert_eq!(parse_choice(" Die "), Choice::Article(Article::Die));
    assert_eq!(parse_choice("3"), Choice::Article(Article::Das));
    assert_eq!(parse_choice("\n"), Choice::Continue);
    assert_eq!(parse_choice("next"), Choice::Continue);
    assert_eq!(parse_choice("r"), Choice::Reset);
    assert_eq!(parse_choice("Q"), Choice::Quit);
    assert_eq!(parse_choice("dem"), Choice::Unknown);
}

#[test]
fn flags_resolve_into_config() {
    let cli = Cli::try_parse_from([
        "artikel",
        "--store",
        "memory",
        "--dataset",
        "nouns.txt",
        "--http-timeout-secs",
        "0",
        "--image-cache-secs",
        "60",
        "--no-images",
        "--server",
        "http://localhost:3000/",
        "progress",
        "reset",
        "--yes",
    ])
    .unwrap();
    assert!(matches!(
        cli.cmd,
        Command::Progress(ProgressCmd::Reset { yes: true })
    ));

    let cfg = AppConfig::from_cli(&cli);
    assert_eq!(cfg.store, StoreKind::Memory);
    assert_eq!(cfg.dataset.to_str(), Some("nouns.txt"));
    assert_eq!(cfg.http_timeout, Duration::from_secs(1));
    assert_eq!(cfg.image_cache_ttl, Duration::from_secs(60));
    assert!(!cfg.images_enabled);
    assert_eq!(cfg.server.as_deref(), Some("http://localhost:3000"));
}

#[test]
fn images_command_takes_term_and_limit() {
    let cli = Cli::try_parse_from(["artikel", "images", "Tisch", "--per-page", "5"]).unwrap();
    match cli.cmd {
        Command::Images(cmd) => {
            assert_eq!(cmd.term, "Tisch");
            assert_eq!(cmd.per_page, 5);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[tokio::test]
async fn sqlite_directory_failure_names_the_directory() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let db = blocker.join("nested").join("artikel.db");

    let cli = Cli::try_parse_from([
        "artikel",
        "--store",
        "sqlite",
        "--db-path",
        db.to_str().unwrap(),
        "progress",
        "show",
    ])
    .unwrap();
    let cfg = AppConfig::from_cli(&cli);

    let err = match open_store(&cfg).await {
        Ok(_) => panic!("store opened below a regular file"),
        Err(err) => err,
    };
    assert!(format!("{err:#}").contains("cannot create database directory"));
}
