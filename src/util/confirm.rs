//! Blocking confirmation dialog via `window.confirm`.
//!
//! Requires a browser environment; SSR paths answer `false` so no request
//! is ever issued server-side.

/// Ask the user to confirm an action. Returns `false` on decline or when no
/// window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
