//! minxin-web - Web app for Minxin Reading Lists
//!
//! Renders the embedded catalog as genre rows with cards, a detail
//! modal, favorites, and page chrome (dark mode, scroll-to-top,
//! platform selector, export).

pub mod catalog_data;
pub mod pages;

use dioxus::prelude::*;
use minxin_ui::stores::{FavoritesStore, ShopState};
use pages::{Catalog, PageChrome};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageChrome)]
    #[route("/")]
    Catalog {},
}

#[component]
pub fn App() -> Element {
    // App-owned stores, provided via context. Components never reach
    // for module-level globals.
    use_context_provider(|| Signal::new(FavoritesStore::load()));
    use_context_provider(|| Signal::new(ShopState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "page-root", Router::<Route> {} }
    }
}
