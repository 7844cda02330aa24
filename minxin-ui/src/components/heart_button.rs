//! Heart (favorite) toggle button

use dioxus::prelude::*;

use crate::components::icons::HeartIcon;

/// Favorite toggle with a one-shot "pop" animation on every click.
///
/// Clicks never propagate to the surrounding card, so favoriting never
/// opens the detail modal.
#[component]
pub fn HeartButton(active: bool, on_toggle: EventHandler<()>) -> Element {
    let mut pops = use_signal(|| 0u32);

    let label = if active {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    rsx! {
        button {
            r#type: "button",
            class: format!("heart-btn{}", if active { " active" } else { "" }),
            aria_label: "{label}",
            onclick: move |evt| {
                evt.stop_propagation();
                pops += 1;
                on_toggle.call(());
            },
            // Re-keying the icon wrapper recreates the DOM node, which
            // is what lets the CSS pop animation replay on every click.
            for pop in [pops()] {
                span {
                    key: "{pop}",
                    class: format!("heart-icon{}", if pop > 0 { " pop" } else { "" }),
                    HeartIcon {}
                }
            }
        }
    }
}
