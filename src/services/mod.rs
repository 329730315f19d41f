//! Auxiliary OAuth provider flows (Google sign-in, Vimeo account linking).
//!
//! LinkedIn initiation and callback go through the backend and live with
//! the session operations in `app.rs`; these providers build their
//! authorization URLs client-side.

pub mod google;
pub mod vimeo;

/// Full-page redirect to an external authorization URL.
///
/// Irreversible within the process: once the location changes there are no
/// cancellation semantics. No-op outside the browser.
pub fn full_page_redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// Origin of the page currently being served, used to build provider
/// redirect URIs.
pub fn frontend_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
