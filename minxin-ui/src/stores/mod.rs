//! App-owned state stores
//!
//! The app shell constructs these and provides them via context, so
//! components never reach for module-level globals.

pub mod favorites;
pub mod shop;
pub mod theme;

pub use favorites::{FavoritesStore, FAVORITES_CHANGED_EVENT, FAVORITES_STORAGE_KEY};
pub use shop::ShopState;
