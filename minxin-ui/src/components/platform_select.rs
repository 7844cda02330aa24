//! Platform selector for the shop-search link
//!
//! A plain `<select>`: the empty first option means "no selection" and
//! keeps the shop link hidden in the detail modal.

use dioxus::prelude::*;
use minxin_common::PLATFORMS;

#[component]
pub fn PlatformSelect(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        select {
            class: "platform-select",
            value: "{value}",
            onchange: move |evt| on_change.call(evt.value()),
            option { value: "", "Find online…" }
            for (platform, label) in PLATFORMS.iter().copied() {
                option {
                    value: "{platform}",
                    selected: platform == value,
                    "{label}"
                }
            }
        }
    }
}
