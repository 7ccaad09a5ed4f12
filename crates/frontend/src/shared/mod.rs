pub mod api_utils;
pub mod components;
pub mod format;

/// Simple confirm dialog via the browser.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}
