//! Scroll-to-top button
//!
//! Appears once the page has scrolled past a fixed threshold; clicking
//! smooth-scrolls back to the top. The layout renders exactly one of
//! these, so there is no duplicate-instance guard to manage.

use dioxus::prelude::*;

use crate::components::icons::ArrowUpIcon;
use crate::wasm_utils::DomEventListener;

/// Vertical scroll offset (px) past which the button shows.
const SCROLL_THRESHOLD: f64 = 600.0;

#[component]
pub fn ScrollTopButton() -> Element {
    let mut visible = use_signal(|| false);
    let mut scroll_listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    use_effect(move || {
        scroll_listener.set(DomEventListener::on_window("scroll", move |_| {
            let past_threshold = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .map(|y| y > SCROLL_THRESHOLD)
                .unwrap_or(false);
            if past_threshold != visible() {
                visible.set(past_threshold);
            }
        }));
    });

    rsx! {
        button {
            r#type: "button",
            class: format!("scroll-top-btn{}", if visible() { " visible" } else { "" }),
            aria_label: "Scroll to top",
            onclick: move |_| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            },
            ArrowUpIcon {}
        }
    }
}
