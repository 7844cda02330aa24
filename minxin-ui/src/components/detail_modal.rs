//! Book detail view rendered inside the modal shell
//!
//! Everything is derived from props on each render, so reopening the
//! modal for another book can never leak stale pills, suggestions, or
//! shop-link state.

use dioxus::prelude::*;
use minxin_common::{shop, similar_books, Book};

use crate::components::fade_in_image::FadeInImage;
use crate::components::icons::XIcon;

#[component]
pub fn BookDetailView(
    book: Book,
    all_books: Vec<Book>,
    /// Selected platform value; empty hides the shop link
    platform: String,
    on_close: EventHandler<()>,
    /// Called when a "more like this" suggestion is clicked
    on_open_book: EventHandler<Book>,
) -> Element {
    let title = book.title.clone();
    let author = book.author.clone();
    let meta = book.meta_line();
    let pills = book.display_pills();
    let description = book.description.clone().unwrap_or_default();
    let location = book.library_location().map(str::to_string);
    let cover = book.image.clone().unwrap_or_default();

    let suggestions: Vec<Book> = similar_books(&book, &all_books)
        .into_iter()
        .cloned()
        .collect();

    let shop_link = build_shop_link(&platform, &book);

    rsx! {
        div { class: "book-modal",
            button {
                r#type: "button",
                class: "book-modal-close",
                aria_label: "Close modal",
                onclick: move |_| on_close.call(()),
                XIcon {}
            }
            div { class: "book-modal-body",
                div { class: "book-modal-left",
                    FadeInImage {
                        src: cover,
                        alt: format!("{title} cover"),
                        class: "book-modal-cover",
                    }
                    if let Some((href, label)) = shop_link {
                        a {
                            class: "book-action-btn",
                            href: "{href}",
                            target: "_blank",
                            rel: "noopener",
                            "Shop on {label}"
                        }
                    }
                }
                div { class: "book-modal-right",
                    h2 { class: "book-modal-title", "{title}" }
                    div { class: "book-modal-author", "{author}" }
                    if !meta.is_empty() {
                        div { class: "book-modal-meta", "{meta}" }
                    }
                    div { class: "book-modal-pills",
                        for pill in pills {
                            span { class: "pill-genre", "{pill}" }
                        }
                    }
                }
            }
            div { class: "book-modal-description",
                "{description}"
                if let Some(location) = location {
                    div { class: "book-modal-library", "📚 {location}" }
                }
            }
            if !suggestions.is_empty() {
                div { class: "book-modal-more",
                    h3 { "More like this" }
                    div { class: "book-modal-more-row",
                        for suggestion in suggestions {
                            MoreLikeCard { book: suggestion.clone(), on_open: on_open_book }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MoreLikeCard(book: Book, on_open: EventHandler<Book>) -> Element {
    let title = book.title.clone();
    let cover = book.image.clone().unwrap_or_default();
    let book_for_click = book.clone();

    rsx! {
        button {
            r#type: "button",
            class: "more-like-card",
            onclick: move |_| on_open.call(book_for_click.clone()),
            FadeInImage { src: cover, alt: format!("{title} cover") }
            span { "{title}" }
        }
    }
}

/// Resolve the shop link (href, short label) for the current platform
/// selection, or `None` when nothing is selected.
fn build_shop_link(platform: &str, book: &Book) -> Option<(String, String)> {
    if platform.is_empty() {
        return None;
    }
    let label = shop::platform_label(platform)
        .map(shop::short_label)
        .unwrap_or("the web");
    Some((
        shop::search_url(platform, &book.title, &book.author),
        label.to_string(),
    ))
}
