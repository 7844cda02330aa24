//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! Attaching a JavaScript event listener from Rust requires keeping the
//! backing `Closure` alive for as long as the listener is attached. The
//! naive `closure.forget()` leaks the closure and leaves the listener
//! attached forever, so listeners here are RAII values: creating one
//! attaches it, dropping it detaches it. Stored in a
//! `Signal<Option<DomEventListener>>`, setting the signal to `None`
//! removes the listener.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A DOM event listener that removes itself when dropped.
pub struct DomEventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DomEventListener {
    /// Attach a listener to an arbitrary event target.
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Attach a listener to the document, if there is one.
    pub fn on_document(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document.into(), event_name, callback))
    }

    /// Attach a listener to the window (scroll, resize), if there is one.
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }
}

impl Drop for DomEventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Run `f` on the next animation frame. The closure hands its memory to
/// the JS side and is freed after the single invocation.
pub fn on_next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Some(func) = callback.dyn_ref::<js_sys::Function>() {
        let _ = window.request_animation_frame(func);
    }
}

/// Blocking user notification.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Trigger a client-side download of `contents` as a UTF-8 text file.
///
/// Creates a Blob object URL, clicks a synthetic anchor, and revokes
/// the URL again. Failures are silently dropped; a missing download is
/// preferable to breaking page interactivity.
pub fn download_text_file(filename: &str, contents: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain;charset=utf-8");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(&url);
        anchor.set_download(filename);
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}
