//! Browser-only helpers: hard redirects and the dark mode preference.
//!
//! Dark mode reads the stored preference from `localStorage` and applies the
//! `.dark` class to the `<html>` element; toggling writes the choice back.
//! Every function is a no-op outside a browser.

#[cfg(feature = "hydrate")]
const DARK_KEY: &str = "classdesk_dark";

/// Navigate with a full page load, abandoning any in-flight client state.
///
/// Used when the session is forcibly terminated and the router may be
/// mid-transition.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Read the dark mode preference.
///
/// A stored choice wins; otherwise the system color scheme decides.
pub fn read_dark_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return false,
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(DARK_KEY) {
                return val == "true";
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark` class on the `<html>` element.
pub fn apply_dark(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                } else {
                    let _ = class_list.remove_1("dark");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle_dark(current: bool) -> bool {
    let next = !current;
    apply_dark(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(DARK_KEY, if next { "true" } else { "false" });
            }
        }
    }
    next
}
