use artikel_core::{parse_dataset, Article, StaticWordSource, WordCard, WordSource};

#[test]
fn parses_plain_lines() {
    let cards = parse_dataset("der,Tisch,table\ndie,Lampe,lamp\n\ndas,Buch,book\n");
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0], WordCard::new(Article::Der, "Tisch", "table"));
    assert_eq!(cards[1].article, Article::Die);
    assert_eq!(cards[2].word, "Buch");
}

#[test]
fn skips_records_with_bad_articles_or_missing_fields() {
    let text = "den,Tisch,table\nDer,Stuhl,chair\ndie,Lampe\ndas,,book\n   \ndie,Tür,door\n";
    let cards = parse_dataset(text);
    assert_eq!(cards, vec![WordCard::new(Article::Die, "Tür", "door")]);
}

#[test]
fn keeps_commas_in_translations() {
    let cards = parse_dataset("das,Schloss,\"castle, lock\"\nder,Kiefer,jaw,pine\n");
    assert_eq!(cards[0].translation, "castle, lock");
    assert_eq!(cards[1].translation, "jaw, pine");
}

#[test]
fn unbalanced_quote_only_drops_its_own_line() {
    let cards = parse_dataset("die,Lampe,\"lamp\nder,Tisch,table\ndas,Buch,book\n");
    assert_eq!(
        cards,
        vec![
            WordCard::new(Article::Der, "Tisch", "table"),
            WordCard::new(Article::Das, "Buch", "book"),
        ]
    );
}

#[test]
fn trims_whitespace_around_fields() {
    let cards = parse_dataset("  die , Katze , cat \r\n");
    assert_eq!(cards, vec![WordCard::new(Article::Die, "Katze", "cat")]);
}

#[tokio::test]
async fn single_entry_dataset_always_draws_it() {
    let src = StaticWordSource::from_text("der,Tisch,table\n");
    for _ in 0..5 {
        let card = src.draw().await.unwrap();
        assert_eq!(card, WordCard::new(Article::Der, "Tisch", "table"));
    }
}

#[tokio::test]
async fn drawn_articles_are_always_valid() {
    let src = StaticWordSource::from_text("der,Hund,dog\ndie,Katze,cat\ndas,Pferd,horse\nxyz,Maus,mouse\n");
    assert_eq!(src.len(), 3);
    for _ in 0..50 {
        let card = src.draw().await.unwrap();
        assert!(Article::ALL.contains(&card.article));
        assert_ne!(card.word, "Maus");
    }
}

#[tokio::test]
async fn empty_dataset_is_unavailable() {
    let src = StaticWordSource::from_text("\n\nnot,a\n");
    let err = src.draw().await.unwrap_err();
    assert!(matches!(err, artikel_core::CoreError::SourceUnavailable(_)));
}

#[test]
fn article_parsing_is_exact() {
    assert_eq!(" das ".parse::<Article>().unwrap(), Article::Das);
    assert!("Das".parse::<Article>().is_err());
    assert!("dem".parse::<Article>().is_err());
}
