//! Favorites export button
//!
//! Resolves the current favorites against the catalog and downloads
//! them as a dated plain-text report. An empty selection gets a
//! blocking alert instead of a file.

use dioxus::prelude::*;
use minxin_common::{export_filename, render_export, Book, EXPORT_LIST_NAME};
use tracing::info;

use crate::components::icons::DownloadIcon;
use crate::stores::FavoritesStore;
use crate::wasm_utils;

#[component]
pub fn ExportFavoritesButton(
    all_books: Vec<Book>,
    #[props(default = EXPORT_LIST_NAME.to_string())] list_name: String,
) -> Element {
    let favorites: Signal<FavoritesStore> = use_context();

    rsx! {
        button {
            r#type: "button",
            class: "export-btn",
            onclick: move |_| {
                let books = favorites.read().favorite_books(&all_books);
                let today = chrono::Local::now().date_naive();
                match render_export(&books, &list_name, today) {
                    Some(report) => {
                        info!(count = books.len(), "exporting favorites");
                        wasm_utils::download_text_file(&export_filename(today), &report);
                    }
                    None => wasm_utils::alert("You have no favorites to export!"),
                }
            },
            DownloadIcon {}
            span { "Export favorites" }
        }
    }
}
