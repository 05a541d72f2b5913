//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

use crate::models::LayoutMode;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Layout for the current window width, sampled now.
///
/// Returns `None` when the width is unavailable (no window).
pub fn viewport_layout() -> Option<LayoutMode> {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(LayoutMode::from_width)
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (including the '#' prefix, empty if none).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Replace the URL hash without adding to browser history.
///
/// The hash should include the '#' prefix. Does not fire `hashchange`.
pub fn replace_hash(hash: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(hash));
    }
}

// =============================================================================
// Console Logging
// =============================================================================

/// Log an informational message to the browser console.
pub fn log_info(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning to the browser console.
pub fn log_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log an error to the browser console.
pub fn log_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_viewport_layout_available_in_browser() {
        assert!(viewport_layout().is_some());
    }

    #[wasm_bindgen_test]
    fn test_replace_hash_updates_location() {
        replace_hash("#/jobs");
        assert_eq!(get_hash(), "#/jobs");
        replace_hash("#/");
        assert_eq!(get_hash(), "#/");
    }
}
