//! Page chrome: header controls around the routed content

use dioxus::prelude::*;
use minxin_ui::stores::ShopState;
use minxin_ui::{DarkModeToggle, ExportFavoritesButton, PlatformSelect, ScrollTopButton};

use crate::catalog_data;
use crate::Route;

#[component]
pub fn PageChrome() -> Element {
    let mut shop: Signal<ShopState> = use_context();

    rsx! {
        header { class: "site-header",
            h1 { class: "site-title", "Minxin Reading Lists" }
            div { class: "site-controls",
                PlatformSelect {
                    value: shop().platform,
                    on_change: move |platform| shop.set(ShopState { platform }),
                }
                ExportFavoritesButton { all_books: catalog_data::books().to_vec() }
                DarkModeToggle {}
            }
        }
        main { class: "site-main", Outlet::<Route> {} }
        ScrollTopButton {}
    }
}
