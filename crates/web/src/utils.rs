// =============================================================================
// Portfolio Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// =============================================================================

use web_sys::Window;

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Window {
    web_sys::window().expect("No window object available")
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Err(e) = window().open_with_url_and_target(url, "_blank") {
        log::warn!("Could not open {}: {:?}", url, e);
    }
}
