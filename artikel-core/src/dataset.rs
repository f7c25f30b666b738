use crate::{Article, WordCard};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

/// Parses `article,word,translation` lines. Records that do not yield a
/// valid card are skipped, so the result only holds usable entries.
///
/// A translation may be double-quoted to carry commas. Unquoted fields past
/// the third are folded back into the translation. Each line is read on its
/// own, so an unbalanced quote only costs its own line.
pub fn parse_dataset(text: &str) -> Vec<WordCard> {
    let mut cards = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match read_line(line) {
            Some(card) => cards.push(card),
            None => debug!(line = idx + 1, "skipping malformed dataset record"),
        }
    }
    cards
}

fn read_line(line: &str) -> Option<WordCard> {
    if line.matches('"').count() % 2 != 0 {
        return None;
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut rec = StringRecord::new();
    match rdr.read_record(&mut rec) {
        Ok(true) => parse_record(&rec),
        Ok(false) => None,
        Err(err) => {
            debug!(error = %err, "unreadable dataset record");
            None
        }
    }
}

fn parse_record(rec: &StringRecord) -> Option<WordCard> {
    let fields: Vec<&str> = rec.iter().collect();
    if fields.len() < 3 {
        return None;
    }
    let article: Article = fields[0].parse().ok()?;
    let word = fields[1];
    let translation = fields[2..].join(", ");
    if word.is_empty() || translation.is_empty() {
        return None;
    }
    Some(WordCard::new(article, word, translation))
}
