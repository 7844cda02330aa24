//! Embedded catalog fixture
//!
//! The catalog ships compiled into the binary and is parsed exactly
//! once. A malformed payload degrades to an empty catalog rather than
//! breaking the page.

use std::sync::OnceLock;

use minxin_common::{parse_catalog, Book};
use tracing::warn;

const CATALOG_JSON: &str = include_str!("../fixtures/books.json");

static CATALOG: OnceLock<Vec<Book>> = OnceLock::new();

pub fn books() -> &'static [Book] {
    CATALOG.get_or_init(|| match parse_catalog(CATALOG_JSON) {
        Ok(books) => books,
        Err(e) => {
            warn!("embedded catalog failed to parse: {e}");
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        assert!(!books().is_empty());
    }

    #[test]
    fn test_embedded_catalog_keys_are_unique() {
        let mut keys: Vec<String> = books().iter().map(|b| b.key()).collect();
        keys.sort();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }

    #[test]
    fn test_every_record_has_title_and_author() {
        for book in books() {
            assert!(!book.title.trim().is_empty());
            assert!(!book.author.trim().is_empty());
        }
    }
}
