//! Theme preference handling.
//!
//! The header's theme button toggles the `dark` class on `<html>` and writes
//! the choice to `localStorage`; on startup the stored choice wins over the
//! system `prefers-color-scheme`. Outside the browser every call is a no-op.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "marketplace_dark";
#[cfg(feature = "csr")]
const DARK_CLASS: &str = "dark";

/// Read the stored theme preference, falling back to the system setting.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }

        match window.match_media("(prefers-color-scheme: dark)") {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Add or remove the `dark` class on the `<html>` element.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(el) =
            web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element())
        else {
            return;
        };
        let class_list = el.class_list();
        let result = if enabled {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("failed to update theme class");
        }
    }
}

/// Flip the theme, apply it, and persist the new value. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
    }
    next
}
