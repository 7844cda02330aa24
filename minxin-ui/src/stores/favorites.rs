//! Favorites store: persistence and change notification around the
//! pure key list
//!
//! Ordering matters here: a toggle persists before the change event is
//! dispatched, so any listener reacting to the event observes the
//! stored state.

use minxin_common::{book_key, Book, Favorites};
use tracing::warn;

use crate::storage;

/// localStorage key holding the JSON array of favorite identity keys.
pub const FAVORITES_STORAGE_KEY: &str = "mxReadingFavorites_v1";

/// CustomEvent dispatched on the document after every toggle.
pub const FAVORITES_CHANGED_EVENT: &str = "mxFavoritesChanged";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FavoritesStore {
    favorites: Favorites,
}

impl FavoritesStore {
    /// Load persisted favorites. Missing or corrupt storage yields an
    /// empty store; the session then runs in-memory only.
    pub fn load() -> Self {
        let favorites = storage::get_string(FAVORITES_STORAGE_KEY)
            .and_then(|raw| match Favorites::from_json(&raw) {
                Ok(favorites) => Some(favorites),
                Err(e) => {
                    warn!("discarding stored favorites: {e}");
                    None
                }
            })
            .unwrap_or_default();
        Self { favorites }
    }

    pub fn is_favorite(&self, book: &Book) -> bool {
        self.favorites.contains_book(book)
    }

    /// Toggle a book's membership, persist, then dispatch exactly one
    /// change event. Returns whether the book is a favorite afterwards.
    pub fn toggle(&mut self, book: &Book) -> bool {
        let now_favorite = self.favorites.toggle(book_key(book));
        self.persist();
        self.notify();
        now_favorite
    }

    /// Defensive copy of the favorite keys.
    pub fn keys(&self) -> Vec<String> {
        self.favorites.keys()
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    pub fn favorite_books(&self, all: &[Book]) -> Vec<Book> {
        self.favorites.favorite_books(all)
    }

    fn persist(&self) {
        storage::set_string(FAVORITES_STORAGE_KEY, &self.favorites.to_json());
    }

    fn notify(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(event) = web_sys::CustomEvent::new(FAVORITES_CHANGED_EVENT) {
            let _ = document.dispatch_event(&event);
        }
    }
}
