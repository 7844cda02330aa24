//! Book card - pure view with callbacks
//!
//! The card stamps its derived identity key as a data attribute so the
//! host page (and tests) can look cards up without re-deriving keys.

use dioxus::prelude::*;
use minxin_common::Book;

use crate::components::fade_in_image::FadeInImage;
use crate::components::heart_button::HeartButton;

#[component]
pub fn BookCard(
    book: Book,
    is_favorite: bool,
    on_open: EventHandler<Book>,
    on_toggle_favorite: EventHandler<Book>,
) -> Element {
    let key = book.key();
    let title = book.title.clone();
    let author = book.author.clone();
    let meta = book.meta_line();
    let cover = book.image.clone().unwrap_or_default();
    let in_library = book.minxin_library;

    let book_for_open = book.clone();
    let book_for_heart = book.clone();

    rsx! {
        div {
            class: "book-card",
            "data-book-key": "{key}",
            onclick: move |_| on_open.call(book_for_open.clone()),
            div { class: "book-card-cover",
                FadeInImage { src: cover, alt: format!("{title} cover") }
                if in_library {
                    MinxinBadge {}
                }
                HeartButton {
                    active: is_favorite,
                    on_toggle: move |_| on_toggle_favorite.call(book_for_heart.clone()),
                }
            }
            div { class: "book-card-body",
                h3 { class: "book-card-title", title: "{title}", "{title}" }
                p { class: "book-card-author", "{author}" }
                if !meta.is_empty() {
                    p { class: "book-card-meta", "{meta}" }
                }
            }
        }
    }
}

/// Badge for books the Minxin library holds on-site.
#[component]
pub fn MinxinBadge() -> Element {
    rsx! {
        div { class: "minxin-badge",
            span { "📚" }
            span { "Minxin" }
        }
    }
}
