//! Story records: one color plus an adjective/noun phrase.

use rand::Rng;

use crate::words::WordList;
use crate::{ColorValue, Error, Result};

/// The `(color, adjective, noun)` triple behind one story card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRecord {
    pub color: ColorValue,
    pub adjective: String,
    pub noun: String,
}

impl StoryRecord {
    pub fn new(color: ColorValue, adjective: impl Into<String>, noun: impl Into<String>) -> Self {
        Self {
            color,
            adjective: adjective.into(),
            noun: noun.into(),
        }
    }

    /// Pick a random adjective, noun and color.
    ///
    /// Fails with [`Error::ListsNotLoaded`] when either list is empty.
    pub fn random<R: Rng + ?Sized>(
        adjectives: &WordList,
        nouns: &WordList,
        rng: &mut R,
    ) -> Result<Self> {
        if adjectives.is_empty() || nouns.is_empty() {
            return Err(Error::ListsNotLoaded);
        }
        let color = ColorValue::random_with_rng(rng);
        let adjective = adjectives.choose(rng).ok_or(Error::ListsNotLoaded)?;
        let noun = nouns.choose(rng).ok_or(Error::ListsNotLoaded)?;
        Ok(Self::new(color, adjective, noun))
    }

    /// `"<Adjective> <Noun>"`
    pub fn description(&self) -> String {
        format!("{} {}", self.adjective, self.noun)
    }
}
