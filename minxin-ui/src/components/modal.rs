//! Modal shell using the native HTML `<dialog>` element
//!
//! `showModal()` gives us top-layer rendering, a focus trap, and
//! `::backdrop` styling for free. The dialog handles its own display
//! (none when closed, block when open), so layout lives on an inner
//! fixed container rather than on the dialog itself.
//!
//! Escape is handled with a document keydown listener while the modal
//! is open: the native dialog closes itself on Escape, and mirroring
//! that into the open signal keeps state and DOM from drifting apart.
//! `showModal()` throws if the dialog is already open, so the effect
//! checks the `open` attribute before acting in either direction.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::wasm_utils::DomEventListener;

/// Counter for generating unique dialog element ids
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Modal component wrapping content in a native `<dialog>` element
#[component]
pub fn Modal(
    /// Controls whether the modal is open
    is_open: ReadOnlySignal<bool>,
    /// Called when the modal should close (Escape or backdrop click)
    on_close: EventHandler<()>,
    /// Modal content
    children: Element,
    /// Optional CSS class for the dialog element
    #[props(default)]
    class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("book-modal-{id}")
    });
    let dialog_id_for_effect = dialog_id.clone();

    // Drive showModal()/close() from the open signal, idempotently.
    use_effect(move || {
        let open = is_open();

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(&dialog_id_for_effect) else {
            return;
        };
        let Some(dialog) = element.dyn_ref::<web_sys::HtmlDialogElement>() else {
            return;
        };

        let is_dialog_open = dialog.has_attribute("open");
        if open && !is_dialog_open {
            let _ = dialog.show_modal();
        } else if !open && is_dialog_open {
            dialog.close();
        }
    });

    // Escape-to-close, attached only while visible.
    let mut escape_listener: Signal<Option<DomEventListener>> = use_signal(|| None);
    use_effect(move || {
        if !is_open() {
            escape_listener.set(None);
            return;
        }
        escape_listener.set(DomEventListener::on_document("keydown", move |evt| {
            let is_escape = evt
                .dyn_ref::<web_sys::KeyboardEvent>()
                .map(|e| e.key() == "Escape")
                .unwrap_or(false);
            if is_escape {
                on_close.call(());
            }
        }));
    });

    let dialog_class = class.unwrap_or_default();

    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "book-modal-dialog {dialog_class}",
            // Children only exist in the DOM while open.
            if is_open() {
                // Fixed container handles backdrop clicks and centering;
                // the inner wrapper stops propagation so content clicks
                // never close the modal.
                div {
                    class: "book-modal-backdrop",
                    onclick: move |_| on_close.call(()),
                    div { class: "book-modal-container", onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
