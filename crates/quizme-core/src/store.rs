//! In-memory flashcard set store.

use indexmap::IndexMap;

use crate::error::FlashcardError;
use crate::model::QnA;
use crate::parser::parse_cards;

/// Named flashcard sets, kept in insertion order.
#[derive(Debug, Default)]
pub struct SetStore {
    sets: IndexMap<String, Vec<QnA>>,
}

impl SetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `raw` and store the cards under `name`.
    ///
    /// The text is parsed before the name is checked, so malformed text is
    /// reported even when the name is taken. An existing set is never
    /// overwritten.
    pub fn create(&mut self, name: &str, raw: &str) -> Result<(), FlashcardError> {
        if name.is_empty() {
            return Err(FlashcardError::MissingArgument("name"));
        }
        let cards = parse_cards(raw)?;
        if self.sets.contains_key(name) {
            return Err(FlashcardError::DuplicateName(name.to_string()));
        }
        tracing::debug!(set = name, cards = cards.len(), "storing flashcard set");
        self.sets.insert(name.to_string(), cards);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    /// Set names in the order they were created.
    pub fn names(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }

    /// Cards of the named set, in their original order.
    pub fn load(&self, name: &str) -> Result<&[QnA], FlashcardError> {
        self.sets
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| FlashcardError::NotFound(name.to_string()))
    }

    /// Remove every set. Returns whether the store is now empty.
    pub fn clear(&mut self) -> bool {
        self.sets.clear();
        self.sets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
