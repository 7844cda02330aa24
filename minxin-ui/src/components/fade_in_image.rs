//! Blur-up image that fades in once "loaded"
//!
//! The blur is lifted on the next animation frame after mount whether
//! or not the resource has actually finished loading, and again on the
//! real load event if that fires first. "Loaded" here means "stop
//! blurring", not that the bytes have arrived.

use dioxus::prelude::*;

use crate::wasm_utils;

#[component]
pub fn FadeInImage(
    src: String,
    alt: String,
    #[props(default = "")] class: &'static str,
) -> Element {
    let mut loaded = use_signal(|| false);

    use_effect(move || {
        wasm_utils::on_next_frame(move || loaded.set(true));
    });

    rsx! {
        img {
            class: format!(
                "{class} blur-up{}",
                if loaded() { " loaded" } else { "" }
            ),
            src: "{src}",
            alt: "{alt}",
            loading: "lazy",
            onload: move |_| loaded.set(true),
        }
    }
}
