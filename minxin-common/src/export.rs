//! Plain-text favorites report
//!
//! Renders the downloadable reading-list export. The caller resolves
//! the favorite records and supplies the export date; rendering itself
//! is pure so the format is testable without a browser.

use chrono::NaiveDate;

use crate::book::Book;

/// Default list name when the host page doesn't supply one.
pub const EXPORT_LIST_NAME: &str = "My Reading List";

/// Description excerpt cap, in characters.
const DESCRIPTION_LIMIT: usize = 200;

/// Download filename for an export generated on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("minxin-favorites-{}.txt", date.format("%Y-%m-%d"))
}

/// Render the favorites report, or `None` when there is nothing to
/// export. The empty case is a user-facing notification upstream, never
/// a file.
pub fn render_export(books: &[Book], list_name: &str, date: NaiveDate) -> Option<String> {
    if books.is_empty() {
        return None;
    }

    let mut text = format!("MY FAVORITE BOOKS - {}\n", list_name.to_uppercase());
    text.push_str("========================================\n\n");
    text.push_str(&format!("Exported: {}\n", date.format("%Y-%m-%d")));
    text.push_str(&format!(
        "Total: {} book{}\n\n",
        books.len(),
        if books.len() == 1 { "" } else { "s" }
    ));

    for (index, book) in books.iter().enumerate() {
        text.push_str(&format!("{}. {}\n", index + 1, book.title));
        text.push_str(&format!(
            "   Author: {}\n",
            if book.author.is_empty() {
                "Unknown"
            } else {
                &book.author
            }
        ));
        if let Some(level) = book.reading_level.as_deref().filter(|s| !s.is_empty()) {
            text.push_str(&format!("   Level: {level}\n"));
        }
        if let Some(age) = book.age_band.as_deref().filter(|s| !s.is_empty()) {
            text.push_str(&format!("   Age: {age}\n"));
        }
        if !book.genres.is_empty() {
            text.push_str(&format!("   Genres: {}\n", book.genres.join(", ")));
        }
        if let Some(description) = book.description.as_deref().filter(|s| !s.is_empty()) {
            text.push_str(&format!("   About: {}\n", excerpt(description)));
        }
        text.push('\n');
    }

    text.push_str("\n---\nExported from Minxin Reading Lists\n");
    Some(text)
}

/// Truncate a description to [`DESCRIPTION_LIMIT`] characters with an
/// ellipsis marker.
fn excerpt(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let mut short: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn book(title: &str, author: &str) -> Book {
        Book {
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_favorites_render_nothing() {
        assert_eq!(render_export(&[], EXPORT_LIST_NAME, date()), None);
    }

    #[test]
    fn test_header_and_counts() {
        let books = vec![book("Matilda", "Roald Dahl")];
        let text = render_export(&books, "Summer picks", date()).unwrap();
        assert!(text.starts_with("MY FAVORITE BOOKS - SUMMER PICKS\n"));
        assert!(text.contains("Exported: 2026-08-07\n"));
        assert!(text.contains("Total: 1 book\n"));
        assert!(text.contains("1. Matilda\n   Author: Roald Dahl\n"));
        assert!(text.ends_with("---\nExported from Minxin Reading Lists\n"));
    }

    #[test]
    fn test_plural_count() {
        let books = vec![book("A", "X"), book("B", "Y")];
        let text = render_export(&books, EXPORT_LIST_NAME, date()).unwrap();
        assert!(text.contains("Total: 2 books\n"));
    }

    #[test]
    fn test_optional_fields_render_when_present() {
        let mut b = book("Holes", "Louis Sachar");
        b.reading_level = Some("Intermediate".into());
        b.age_band = Some("9-12".into());
        b.genres = vec!["Adventure".into(), "Mystery".into()];
        b.description = Some("A boy digs holes.".into());

        let text = render_export(&[b], EXPORT_LIST_NAME, date()).unwrap();
        assert!(text.contains("   Level: Intermediate\n"));
        assert!(text.contains("   Age: 9-12\n"));
        assert!(text.contains("   Genres: Adventure, Mystery\n"));
        assert!(text.contains("   About: A boy digs holes.\n"));
    }

    #[test]
    fn test_missing_author_reads_unknown() {
        let text = render_export(&[book("Anon", "")], EXPORT_LIST_NAME, date()).unwrap();
        assert!(text.contains("   Author: Unknown\n"));
    }

    #[test]
    fn test_long_description_is_truncated_with_ellipsis() {
        let mut b = book("Long", "A");
        b.description = Some("x".repeat(500));
        let text = render_export(&[b], EXPORT_LIST_NAME, date()).unwrap();
        let line = text
            .lines()
            .find(|l| l.trim_start().starts_with("About:"))
            .unwrap();
        assert!(line.ends_with("..."));
        assert_eq!(line.trim_start().len(), "About: ".len() + 200 + 3);
    }

    #[test]
    fn test_export_filename_embeds_iso_date() {
        assert_eq!(export_filename(date()), "minxin-favorites-2026-08-07.txt");
    }
}
