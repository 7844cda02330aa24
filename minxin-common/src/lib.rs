//! minxin-common - Pure domain logic for Minxin Reading Lists
//!
//! Book records, identity keys, the favorites list, similarity
//! selection, shop-search URLs, and the plain-text export. No browser
//! dependencies, so everything here is unit-testable on any target.

pub mod book;
pub mod catalog;
pub mod export;
pub mod favorites;
pub mod shop;

pub use book::{book_key, similar_books, Book, SIMILAR_LIMIT};
pub use catalog::{parse_catalog, CatalogError};
pub use export::{export_filename, render_export, EXPORT_LIST_NAME};
pub use favorites::{Favorites, FavoritesParseError};
pub use shop::{search_url, short_label, PLATFORMS};
