use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Der,
    Die,
    Das,
}

impl Article {
    pub const ALL: [Article; 3] = [Article::Der, Article::Die, Article::Das];

    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Der => "der",
            Article::Die => "die",
            Article::Das => "das",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Article {
    type Err = CoreError;

    /// Exact lowercase match; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "der" => Ok(Article::Der),
            "die" => Ok(Article::Die),
            "das" => Ok(Article::Das),
            _ => Err(CoreError::Invalid("article must be der, die or das")),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCard {
    pub article: Article,
    pub word: String,
    pub translation: String,
}

impl WordCard {
    pub fn new(article: Article, word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            article,
            word: word.into(),
            translation: translation.into(),
        }
    }

    /// "die Lampe"
    pub fn with_article(&self) -> String {
        format!("{} {}", self.article, self.word)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnrichedCard {
    #[serde(flatten)]
    pub card: WordCard,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

impl EnrichedCard {
    pub fn bare(card: WordCard) -> Self {
        Self { card, image_url: None }
    }
}

/// One provider hit, reshaped. Field names follow the provider's JSON so the
/// same type decodes the upstream body and encodes our response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResult {
    pub id: u64,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "previewURL", default)]
    pub preview_url: String,
    #[serde(rename = "previewWidth", default)]
    pub preview_width: u32,
    #[serde(rename = "previewHeight", default)]
    pub preview_height: u32,
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(rename = "webformatWidth", default)]
    pub webformat_width: u32,
    #[serde(rename = "webformatHeight", default)]
    pub webformat_height: u32,
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: String,
    #[serde(rename = "imageWidth", default)]
    pub image_width: u32,
    #[serde(rename = "imageHeight", default)]
    pub image_height: u32,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub collections: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub user: String,
    #[serde(rename = "userImageURL", default)]
    pub user_image_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ImageSearch {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
    pub hits: Vec<ImageResult>,
}

impl ImageSearch {
    pub fn first_url(&self) -> Option<&str> {
        self.hits.first().map(|h| h.webformat_url.as_str())
    }
}

/// Words the user has answered correctly at least once. Serializes as a
/// plain list of strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressSet(BTreeSet<String>);

impl ProgressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the word was not present before.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.0.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ProgressSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
