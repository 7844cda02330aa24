//! Dark mode persistence and application

use crate::storage;

/// localStorage key for the dark-mode flag ("1"/"0").
pub const DARK_MODE_STORAGE_KEY: &str = "mx_darkmode";

/// Document-root class that activates the dark palette.
const DARK_CLASS: &str = "dark";

pub fn load_dark_mode() -> bool {
    storage::get_flag(DARK_MODE_STORAGE_KEY).unwrap_or(false)
}

pub fn save_dark_mode(enabled: bool) {
    storage::set_flag(DARK_MODE_STORAGE_KEY, enabled);
}

/// Toggle the `dark` class on the document body.
pub fn apply_dark_mode(enabled: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let class_list = body.class_list();
    let result = if enabled {
        class_list.add_1(DARK_CLASS)
    } else {
        class_list.remove_1(DARK_CLASS)
    };
    result.ok();
}
