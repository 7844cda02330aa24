//! Book records and derived display values
//!
//! Records come straight from the catalog JSON. Optional fields stay
//! optional; display strings are derived here rather than ad hoc at
//! render sites. Identity is derived from title and author because the
//! catalog guarantees no identifier field.

use serde::{Deserialize, Serialize};

/// Separator between the trimmed title and author in an identity key.
const KEY_SEPARATOR: &str = "::";

/// Separator for the reading-level / age-band meta line.
const META_SEPARATOR: &str = " · ";

/// Cap on "more like this" suggestions.
pub const SIMILAR_LIMIT: usize = 6;

/// A single catalog book record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Catalog ordinal like "sd-042". Display only; identity is derived.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reading_level: Option<String>,
    #[serde(default)]
    pub age_band: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Short display pills; falls back to `genres` when empty.
    #[serde(default)]
    pub genre_pills: Vec<String>,
    /// Whether the Minxin library holds a physical copy.
    #[serde(default)]
    pub minxin_library: bool,
    #[serde(default)]
    pub minxin_location_en: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Derive the identity key for a book record.
///
/// Two records with equal trimmed (title, author) are the same book.
/// Records missing both fields collapse to `"::"`, an accepted
/// ambiguity in the catalog that is not corrected here.
pub fn book_key(book: &Book) -> String {
    format!(
        "{}{}{}",
        book.title.trim(),
        KEY_SEPARATOR,
        book.author.trim()
    )
}

impl Book {
    /// Identity key for this record. See [`book_key`].
    pub fn key(&self) -> String {
        book_key(self)
    }

    /// First non-empty listed genre, used as the similarity anchor.
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres
            .iter()
            .map(String::as_str)
            .find(|g| !g.is_empty())
    }

    /// Reading level and age band joined with a middle dot.
    ///
    /// Absent or empty fields are omitted; never produces a dangling
    /// separator.
    pub fn meta_line(&self) -> String {
        [&self.reading_level, &self.age_band]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(META_SEPARATOR)
    }

    /// Deduplicated genre pills, preferring the explicit display list
    /// over raw genres. Encounter order is preserved.
    pub fn display_pills(&self) -> Vec<String> {
        let source = if self.genre_pills.is_empty() {
            &self.genres
        } else {
            &self.genre_pills
        };

        let mut pills: Vec<String> = Vec::new();
        for pill in source {
            if !pills.contains(pill) {
                pills.push(pill.clone());
            }
        }
        pills
    }

    /// Library location annotation, present only when the book is both
    /// flagged as locally held and has a location string.
    pub fn library_location(&self) -> Option<&str> {
        if !self.minxin_library {
            return None;
        }
        self.minxin_location_en.as_deref()
    }
}

/// Select up to [`SIMILAR_LIMIT`] books related to `book`.
///
/// A candidate matches when it shares the book's primary genre or the
/// exact reading-level string. The book itself is excluded by identity
/// key. Candidates keep catalog order; there is no further ranking.
pub fn similar_books<'a>(book: &Book, all: &'a [Book]) -> Vec<&'a Book> {
    let current_key = book_key(book);
    let primary_genre = book.primary_genre();
    let level = book
        .reading_level
        .as_deref()
        .filter(|level| !level.is_empty());

    all.iter()
        .filter(|candidate| book_key(candidate) != current_key)
        .filter(|candidate| {
            if let Some(genre) = primary_genre {
                if candidate.genres.iter().any(|g| g == genre) {
                    return true;
                }
            }
            if let Some(level) = level {
                if candidate.reading_level.as_deref() == Some(level) {
                    return true;
                }
            }
            false
        })
        .take(SIMILAR_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, author: &str) -> Book {
        Book {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_key_trims_title_and_author() {
        let a = book("  Charlotte's Web ", " E. B. White  ");
        let b = book("Charlotte's Web", "E. B. White");
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key(), "Charlotte's Web::E. B. White");
    }

    #[test]
    fn test_key_is_idempotent() {
        let b = book("Matilda", "Roald Dahl");
        assert_eq!(b.key(), b.key());
    }

    #[test]
    fn test_missing_fields_collapse_to_bare_separator() {
        let a = Book::default();
        let b = Book::default();
        assert_eq!(a.key(), "::");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_meta_line_joins_both_parts() {
        let mut b = book("t", "a");
        b.reading_level = Some("Intermediate".into());
        b.age_band = Some("8-10".into());
        assert_eq!(b.meta_line(), "Intermediate · 8-10");
    }

    #[test]
    fn test_meta_line_omits_absent_parts() {
        let mut b = book("t", "a");
        assert_eq!(b.meta_line(), "");

        b.age_band = Some("8-10".into());
        assert_eq!(b.meta_line(), "8-10");

        b.age_band = Some(String::new());
        b.reading_level = Some("Beginner".into());
        assert_eq!(b.meta_line(), "Beginner");
    }

    #[test]
    fn test_display_pills_prefer_explicit_list() {
        let mut b = book("t", "a");
        b.genres = vec!["Fantasy Worlds".into()];
        b.genre_pills = vec!["Fantasy".into(), "Fantasy".into(), "Classics".into()];
        assert_eq!(b.display_pills(), vec!["Fantasy", "Classics"]);
    }

    #[test]
    fn test_display_pills_fall_back_to_genres() {
        let mut b = book("t", "a");
        b.genres = vec!["Sport".into(), "Sport".into()];
        assert_eq!(b.display_pills(), vec!["Sport"]);
    }

    #[test]
    fn test_library_location_requires_flag_and_string() {
        let mut b = book("t", "a");
        b.minxin_location_en = Some("Shelf B2".into());
        assert_eq!(b.library_location(), None);

        b.minxin_library = true;
        assert_eq!(b.library_location(), Some("Shelf B2"));
    }

    #[test]
    fn test_similar_matches_genre_and_level_in_order() {
        let mut source = book("Source", "A");
        source.genres = vec!["Fantasy".into()];
        source.reading_level = Some("Intermediate".into());

        let mut pool = Vec::new();
        for i in 0..3 {
            let mut b = book(&format!("Genre {i}"), "X");
            b.genres = vec!["Fantasy".into()];
            pool.push(b);
        }
        for i in 0..2 {
            let mut b = book(&format!("Level {i}"), "X");
            b.genres = vec!["Sport".into()];
            b.reading_level = Some("Intermediate".into());
            pool.push(b);
        }
        for i in 0..5 {
            let mut b = book(&format!("Noise {i}"), "X");
            b.genres = vec!["Poetry".into()];
            b.reading_level = Some("Advanced".into());
            pool.push(b);
        }
        // The source itself is in the pool and must never be suggested.
        pool.push(source.clone());

        let similar = similar_books(&source, &pool);
        let titles: Vec<&str> = similar.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Genre 0", "Genre 1", "Genre 2", "Level 0", "Level 1"]
        );
    }

    #[test]
    fn test_similar_caps_at_limit() {
        let mut source = book("Source", "A");
        source.genres = vec!["Fantasy".into()];

        let pool: Vec<Book> = (0..10)
            .map(|i| {
                let mut b = book(&format!("B{i}"), "X");
                b.genres = vec!["Fantasy".into()];
                b
            })
            .collect();

        assert_eq!(similar_books(&source, &pool).len(), SIMILAR_LIMIT);
    }

    #[test]
    fn test_similar_without_genre_or_level_matches_nothing() {
        let source = book("Source", "A");
        let mut other = book("Other", "B");
        other.genres = vec!["Fantasy".into()];
        let pool = vec![other];
        assert!(similar_books(&source, &pool).is_empty());
    }
}
