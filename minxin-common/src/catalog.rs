//! Catalog boundary
//!
//! Book records enter the system exactly once, here. Optional-field
//! tolerance lives in the `Book` serde defaults; anything that isn't a
//! JSON array of records is a hard parse error for the caller to
//! degrade on.

use crate::book::Book;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog payload: {0}")]
    InvalidJson(String),
}

/// Parse a catalog JSON array into book records.
pub fn parse_catalog(json: &str) -> Result<Vec<Book>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_records() {
        let books = parse_catalog(r#"[{"title": "Matilda", "author": "Roald Dahl"}]"#).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Matilda");
        assert!(books[0].genres.is_empty());
        assert!(!books[0].minxin_library);
    }

    #[test]
    fn test_parses_full_generator_shape() {
        let json = r#"[{
            "id": "sd-001",
            "title": "Charlotte's Web",
            "author": "E. B. White",
            "description": "A pig and a spider.",
            "genres": ["Classics & Canon"],
            "genre_pills": ["Classics"],
            "reading_level": "Intermediate",
            "age_band": "8-10",
            "image": "images/charlottes-web.jpg",
            "division": "SD-English",
            "language": "English",
            "minxin_library": true,
            "minxin_location_en": "Shelf B2"
        }]"#;
        let books = parse_catalog(json).unwrap();
        assert_eq!(books[0].id.as_deref(), Some("sd-001"));
        assert_eq!(books[0].display_pills(), vec!["Classics"]);
        assert_eq!(books[0].library_location(), Some("Shelf B2"));
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let books =
            parse_catalog(r#"[{"title": "T", "author": "A", "isbn": "978-0000000000"}]"#).unwrap();
        assert_eq!(books[0].title, "T");
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        assert!(parse_catalog(r#"{"books": []}"#).is_err());
        assert!(parse_catalog("not json").is_err());
    }
}
