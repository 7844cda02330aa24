//! Dark mode toggle
//!
//! State is read from storage once at mount and written back on every
//! toggle; the body class and the button label always reflect it.

use dioxus::prelude::*;

use crate::stores::theme;

#[component]
pub fn DarkModeToggle() -> Element {
    let mut dark = use_signal(theme::load_dark_mode);

    use_effect(move || theme::apply_dark_mode(dark()));

    rsx! {
        button {
            r#type: "button",
            class: "dark-mode-toggle",
            onclick: move |_| {
                let enabled = !dark();
                dark.set(enabled);
                theme::save_dark_mode(enabled);
            },
            if dark() {
                "☀️ Light"
            } else {
                "🌙 Dark"
            }
        }
    }
}
