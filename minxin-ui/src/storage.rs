//! Local storage helpers
//!
//! Every accessor degrades to `None`/no-op when storage is unavailable
//! or the write fails (quota, disabled storage); the UI must keep
//! working in-memory either way.

pub fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    let Some(storage) = get_storage() else {
        return;
    };
    if storage.set_item(key, value).is_err() {
        tracing::debug!("localStorage write failed for {key}");
    }
}

/// Single-character boolean flag: `"1"` is true, `"0"` is false,
/// anything else reads as unset.
pub fn get_flag(key: &str) -> Option<bool> {
    match get_string(key).as_deref() {
        Some("1") => Some(true),
        Some("0") => Some(false),
        _ => None,
    }
}

pub fn set_flag(key: &str, value: bool) {
    set_string(key, if value { "1" } else { "0" });
}
