use crate::{
    Article, CoreError, EnrichedCard, ImageSource, ProgressSet, ProgressStore, SessionTally,
    WordCard, WordSource, DEFAULT_IMAGE_LIMIT,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Generation number of a round. Every round start bumps it; fetch results
/// carrying an older token are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundToken(u64);

impl RoundToken {
    fn next(self) -> Self {
        RoundToken(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Ready(EnrichedCard),
    Answered { card: EnrichedCard, was_correct: bool },
    LoadFailed { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub was_correct: bool,
    /// False when the word was already in the progress set.
    pub newly_learned: bool,
    pub feedback: String,
}

/// Draws a card and attaches the first image hit, if any. Image failures of
/// every kind degrade to no image.
pub async fn fetch_enriched(
    words: &dyn WordSource,
    images: &dyn ImageSource,
) -> Result<EnrichedCard, CoreError> {
    let card = words.draw().await?;
    Ok(enrich(card, images).await)
}

pub async fn enrich(card: WordCard, images: &dyn ImageSource) -> EnrichedCard {
    let image_url = match images.search(&card.word, DEFAULT_IMAGE_LIMIT).await {
        Ok(found) => found.first_url().map(str::to_string),
        Err(err) => {
            debug!(word = %card.word, error = %err, "no image for card");
            None
        }
    };
    EnrichedCard { card, image_url }
}

/// Work for one round, detached from the controller so it can run on a
/// background task.
pub struct RoundRequest {
    token: RoundToken,
    words: Arc<dyn WordSource>,
    images: Arc<dyn ImageSource>,
}

impl RoundRequest {
    pub fn token(&self) -> RoundToken {
        self.token
    }

    pub async fn fetch(self) -> RoundOutcome {
        let result = fetch_enriched(&*self.words, &*self.images).await;
        RoundOutcome {
            token: self.token,
            result,
        }
    }
}

#[derive(Debug)]
pub struct RoundOutcome {
    pub token: RoundToken,
    pub result: Result<EnrichedCard, CoreError>,
}

pub struct SessionController {
    words: Arc<dyn WordSource>,
    images: Arc<dyn ImageSource>,
    store: Arc<dyn ProgressStore>,
    progress: ProgressSet,
    state: SessionState,
    feedback: Option<String>,
    round: RoundToken,
    tally: SessionTally,
}

impl SessionController {
    /// Reads the progress set once. A failing store starts the session empty.
    pub async fn new(
        words: Arc<dyn WordSource>,
        images: Arc<dyn ImageSource>,
        store: Arc<dyn ProgressStore>,
    ) -> Self {
        let progress = match store.load().await {
            Ok(p) => p,
            Err(err) => {
                warn!(error = %err, "could not load progress, starting empty");
                ProgressSet::default()
            }
        };
        Self {
            words,
            images,
            store,
            progress,
            state: SessionState::Loading,
            feedback: None,
            round: RoundToken::default(),
            tally: SessionTally::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn progress(&self) -> &ProgressSet {
        &self.progress
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    pub fn current_round(&self) -> RoundToken {
        self.round
    }

    pub fn current_card(&self) -> Option<&EnrichedCard> {
        match &self.state {
            SessionState::Ready(card) | SessionState::Answered { card, .. } => Some(card),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    pub fn can_answer(&self) -> bool {
        matches!(self.state, SessionState::Ready(_))
    }

    /// "next" is only offered once the current card has been answered.
    pub fn can_advance(&self) -> bool {
        matches!(self.state, SessionState::Answered { .. })
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.state, SessionState::LoadFailed { .. })
    }

    pub fn can_reset(&self) -> bool {
        matches!(
            self.state,
            SessionState::Ready(_) | SessionState::Answered { .. }
        )
    }

    /// Enters `Loading` under a fresh token. Outcomes of earlier rounds that
    /// are still in flight will no longer apply.
    pub fn start_round(&mut self) -> RoundRequest {
        self.round = self.round.next();
        self.state = SessionState::Loading;
        self.feedback = None;
        debug!(round = self.round.value(), "round started");
        RoundRequest {
            token: self.round,
            words: Arc::clone(&self.words),
            images: Arc::clone(&self.images),
        }
    }

    /// Applies a fetched round. Returns false if the outcome was stale.
    pub fn apply(&mut self, outcome: RoundOutcome) -> bool {
        if outcome.token != self.round || !self.is_loading() {
            debug!(
                outcome = outcome.token.value(),
                current = self.round.value(),
                "discarding stale round outcome"
            );
            return false;
        }
        self.state = match outcome.result {
            Ok(card) => SessionState::Ready(card),
            Err(err) => {
                warn!(error = %err, "could not draw a card");
                SessionState::LoadFailed {
                    reason: err.to_string(),
                }
            }
        };
        true
    }

    /// Starts a round and waits for it in place.
    pub async fn load_round(&mut self) -> &SessionState {
        let outcome = self.start_round().fetch().await;
        self.apply(outcome);
        &self.state
    }

    pub fn next(&mut self) -> Option<RoundRequest> {
        self.can_advance().then(|| self.start_round())
    }

    pub fn retry(&mut self) -> Option<RoundRequest> {
        self.can_retry().then(|| self.start_round())
    }

    /// Scores `selected` against the current card. `None` unless the
    /// controller is `Ready`, so each card is scored at most once.
    pub async fn answer(&mut self, selected: Article) -> Option<AnswerOutcome> {
        let SessionState::Ready(card) = &self.state else {
            debug!("answer ignored outside of Ready");
            return None;
        };
        let card = card.clone();
        let was_correct = selected == card.card.article;

        let mut newly_learned = false;
        let feedback = if was_correct {
            newly_learned = self.progress.insert(card.card.word.clone());
            self.persist().await;
            format!("Correct! \"{} {}\" is right!", selected, card.card.word)
        } else {
            format!(
                "Incorrect. The correct article is \"{}\"",
                card.card.with_article()
            )
        };

        self.tally.record(was_correct);
        self.feedback = Some(feedback.clone());
        self.state = SessionState::Answered { card, was_correct };

        Some(AnswerOutcome {
            was_correct,
            newly_learned,
            feedback,
        })
    }

    /// Clears and persists the progress set. The caller collects the user's
    /// confirmation first. Leaves card and feedback untouched.
    pub async fn reset_progress(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.progress.clear();
        self.persist().await;
        info!("progress reset");
        true
    }

    async fn persist(&self) {
        if let Err(err) = self.store.save(&self.progress).await {
            warn!(error = %err, "could not save progress");
        }
    }
}
