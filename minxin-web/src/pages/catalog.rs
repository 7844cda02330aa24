//! Catalog page: favorites row, genre rows, and the detail modal

use dioxus::prelude::*;
use minxin_common::Book;
use minxin_ui::stores::{FavoritesStore, ShopState};
use minxin_ui::{BookCard, BookDetailView, GenreRow, Modal};

use crate::catalog_data;

/// Row heading for books without any genre pill.
const UNSORTED_ROW: &str = "More Books";

#[component]
pub fn Catalog() -> Element {
    let mut favorites: Signal<FavoritesStore> = use_context();
    let shop: Signal<ShopState> = use_context();

    let mut modal_open = use_signal(|| false);
    let modal_open_read: ReadOnlySignal<bool> = modal_open.into();
    let mut modal_book: Signal<Option<Book>> = use_signal(|| None);

    let books = catalog_data::books();
    let favorite_books = favorites.read().favorite_books(books);

    let mut open_book = move |book: Book| {
        modal_book.set(Some(book));
        modal_open.set(true);
    };

    rsx! {
        if !favorite_books.is_empty() {
            GenreRow { title: "My Favorites",
                for book in favorite_books {
                    BookCard {
                        book: book.clone(),
                        is_favorite: true,
                        on_open: move |b| open_book(b),
                        on_toggle_favorite: move |b: Book| {
                            favorites.write().toggle(&b);
                        },
                    }
                }
            }
        }
        for (genre, row) in genre_rows(books) {
            GenreRow { title: genre,
                for book in row {
                    BookCard {
                        is_favorite: favorites.read().is_favorite(&book),
                        book: book.clone(),
                        on_open: move |b| open_book(b),
                        on_toggle_favorite: move |b: Book| {
                            favorites.write().toggle(&b);
                        },
                    }
                }
            }
        }
        Modal {
            is_open: modal_open_read,
            on_close: move |_| modal_open.set(false),
            if let Some(book) = modal_book() {
                BookDetailView {
                    book,
                    all_books: books.to_vec(),
                    platform: shop().platform,
                    on_close: move |_| modal_open.set(false),
                    on_open_book: move |b| open_book(b),
                }
            }
        }
    }
}

/// Group the catalog into rows keyed by each book's first display pill,
/// in encounter order. Books without pills land in a trailing bucket.
fn genre_rows(books: &[Book]) -> Vec<(String, Vec<Book>)> {
    let mut rows: Vec<(String, Vec<Book>)> = Vec::new();
    let mut unsorted: Vec<Book> = Vec::new();

    for book in books {
        match book.display_pills().into_iter().next() {
            Some(pill) => match rows.iter_mut().find(|(name, _)| *name == pill) {
                Some((_, row)) => row.push(book.clone()),
                None => rows.push((pill, vec![book.clone()])),
            },
            None => unsorted.push(book.clone()),
        }
    }

    if !unsorted.is_empty() {
        rows.push((UNSORTED_ROW.to_string(), unsorted));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, pill: &str) -> Book {
        Book {
            title: title.into(),
            author: "A".into(),
            genre_pills: if pill.is_empty() {
                vec![]
            } else {
                vec![pill.into()]
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_group_by_first_pill_in_encounter_order() {
        let books = vec![
            book("A", "Fantasy"),
            book("B", "Mystery"),
            book("C", "Fantasy"),
        ];
        let rows = genre_rows(&books);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "Fantasy");
        assert_eq!(rows[0].1.len(), 2);
        assert_eq!(rows[1].0, "Mystery");
    }

    #[test]
    fn test_books_without_pills_land_in_trailing_bucket() {
        let books = vec![book("A", "Fantasy"), book("B", "")];
        let rows = genre_rows(&books);
        assert_eq!(rows.last().unwrap().0, UNSORTED_ROW);
        assert_eq!(rows.last().unwrap().1[0].title, "B");
    }
}
