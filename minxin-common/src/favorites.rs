//! Ordered, deduplicated list of favorited book keys
//!
//! Pure data structure: persistence and change notification live in the
//! UI layer. The JSON form is a plain string array so the stored value
//! stays readable and forward-compatible.

use crate::book::{book_key, Book};

/// Favorites as an ordered sequence of identity keys.
///
/// Deduplicated by construction: [`Favorites::toggle`] adds a key only
/// if absent and removes the first occurrence if present, so toggling
/// twice is a no-op on membership.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Favorites {
    keys: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum FavoritesParseError {
    #[error("favorites payload is not a JSON string array: {0}")]
    InvalidJson(String),
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored keys, dropping duplicates while keeping the
    /// first occurrence of each.
    pub fn from_keys(keys: Vec<String>) -> Self {
        let mut favorites = Self::new();
        for key in keys {
            if !favorites.contains(&key) {
                favorites.keys.push(key);
            }
        }
        favorites
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn contains_book(&self, book: &Book) -> bool {
        self.contains(&book_key(book))
    }

    /// Toggle membership for `key`. Returns whether the key is a member
    /// after the call.
    pub fn toggle(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        match self.keys.iter().position(|k| *k == key) {
            Some(idx) => {
                self.keys.remove(idx);
                false
            }
            None => {
                self.keys.push(key);
                true
            }
        }
    }

    /// Defensive copy of the key sequence.
    pub fn keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Filter `all` down to the favorited records, in catalog order.
    pub fn favorite_books(&self, all: &[Book]) -> Vec<Book> {
        all.iter()
            .filter(|book| self.contains_book(book))
            .cloned()
            .collect()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.keys).expect("key list is always serializable")
    }

    pub fn from_json(raw: &str) -> Result<Self, FavoritesParseError> {
        let keys: Vec<String> = serde_json::from_str(raw)
            .map_err(|e| FavoritesParseError::InvalidJson(e.to_string()))?;
        Ok(Self::from_keys(keys))
    }
}
