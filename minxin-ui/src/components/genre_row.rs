//! Horizontal genre row with overflow fade hints
//!
//! The fade hint class is applied only when the row's content actually
//! overflows its visible width (with a small tolerance so a pixel of
//! rounding never flickers the hint). Re-measured on window resize.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::wasm_utils::{self, DomEventListener};

/// Counter for generating unique row element ids
static ROW_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Overflow below this many pixels doesn't earn a fade hint.
const OVERFLOW_TOLERANCE: i32 = 10;

#[component]
pub fn GenreRow(
    /// Row heading
    title: String,
    children: Element,
) -> Element {
    let row_id = use_hook(|| {
        let id = ROW_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("genre-scroll-{id}")
    });
    let row_id_for_effect = row_id.clone();

    let mut overflowing = use_signal(|| false);
    let mut resize_listener: Signal<Option<DomEventListener>> = use_signal(|| None);

    use_effect(move || {
        let mut measure = {
            let row_id = row_id_for_effect.clone();
            move || {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let Some(element) = document.get_element_by_id(&row_id) else {
                    return;
                };
                let overflow = element.scroll_width() > element.client_width() + OVERFLOW_TOLERANCE;
                if overflow != overflowing() {
                    overflowing.set(overflow);
                }
            }
        };

        // First measurement waits a frame so the row has been laid out.
        {
            let mut measure = measure.clone();
            wasm_utils::on_next_frame(move || measure());
        }
        resize_listener.set(DomEventListener::on_window("resize", move |_| measure()));
    });

    rsx! {
        section { class: "genre-section",
            h2 { class: "genre-title", "{title}" }
            div {
                id: "{row_id}",
                class: format!(
                    "genre-scroll{}",
                    if overflowing() { " scroll-fade" } else { "" }
                ),
                {children}
            }
        }
    }
}
