use crate::{parse_dataset, CoreError, ImageSearch, WordCard};
use async_trait::async_trait;
use rand::Rng;

pub const DEFAULT_IMAGE_LIMIT: u32 = 20;

/// Supplies one random card per call, uniformly and with replacement.
#[async_trait]
pub trait WordSource: Send + Sync {
    async fn draw(&self) -> Result<WordCard, CoreError>;
}

#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fails with `InvalidQuery` for a blank term before doing any I/O and
    /// with `NoResults` when the provider has nothing to show.
    async fn search(&self, term: &str, limit: u32) -> Result<ImageSearch, CoreError>;
}

/// Trimmed search term, or `InvalidQuery` if nothing is left.
pub fn validate_term(term: &str) -> Result<&str, CoreError> {
    let t = term.trim();
    if t.is_empty() {
        return Err(CoreError::InvalidQuery("search term is required"));
    }
    Ok(t)
}

/// Picks a uniformly random card from `cards`.
pub fn pick_random<R: Rng + ?Sized>(cards: &[WordCard], rng: &mut R) -> Option<WordCard> {
    if cards.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..cards.len());
    Some(cards[idx].clone())
}

/// Fixed in-memory population.
#[derive(Clone, Debug, Default)]
pub struct StaticWordSource {
    cards: Vec<WordCard>,
}

impl StaticWordSource {
    pub fn new(cards: Vec<WordCard>) -> Self {
        Self { cards }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(parse_dataset(text))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn pick(&self) -> Option<WordCard> {
        pick_random(&self.cards, &mut rand::rng())
    }
}

#[async_trait]
impl WordSource for StaticWordSource {
    async fn draw(&self) -> Result<WordCard, CoreError> {
        self.pick()
            .ok_or_else(|| CoreError::unavailable("dataset has no usable entries"))
    }
}

/// Image source that never finds anything; enrichment turned off.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoImages;

#[async_trait]
impl ImageSource for NoImages {
    async fn search(&self, term: &str, _limit: u32) -> Result<ImageSearch, CoreError> {
        validate_term(term)?;
        Err(CoreError::NoResults)
    }
}
