//! Vimeo OAuth linking for an already signed-in user.
//!
//! Initiation stores a one-shot random `state` nonce before the full-page
//! redirect; the callback consumes it exactly once and rejects when the
//! provider echoes back anything else.

#[cfg(test)]
#[path = "vimeo_test.rs"]
mod vimeo_test;

use thiserror::Error;

use crate::net::api::{self, ApiError};

/// Transient localStorage key for the CSRF state nonce.
pub const VIMEO_STATE_KEY: &str = "vimeo_auth_state";

/// One-shot stash for the CSRF state nonce.
pub trait StateStash {
    fn put(&self, value: &str);
    /// Read and remove the stored value in one step.
    fn take(&self) -> Option<String>;
}

/// Nonce stash backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStash;

impl StateStash for BrowserStash {
    fn put(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            crate::session::store::storage_set(VIMEO_STATE_KEY, value);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    }

    fn take(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let value = crate::session::store::storage_get(VIMEO_STATE_KEY);
            crate::session::store::storage_remove(VIMEO_STATE_KEY);
            value
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VimeoError {
    #[error("state parameter does not match the stored value")]
    StateMismatch,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Vimeo authorization URL for the given client and redirect target.
pub fn authorize_url(client_id: &str, redirect_uri: &str, state: &str) -> String {
    format!(
        "https://api.vimeo.com/oauth/authorize\
         ?client_id={client_id}\
         &redirect_uri={redirect_uri}\
         &response_type=code\
         &scope=public+private\
         &state={state}"
    )
}

/// Store a fresh nonce and redirect to Vimeo's authorization page.
pub fn initiate<S: StateStash>(stash: &S) {
    let state = uuid::Uuid::new_v4().simple().to_string();
    stash.put(&state);
    let redirect_uri = format!("{}/auth/vimeo/callback", crate::services::frontend_origin());
    let client_id = option_env!("TRIEDTHAT_VIMEO_CLIENT_ID").unwrap_or("");
    crate::services::full_page_redirect(&authorize_url(client_id, &redirect_uri, &state));
}

/// Consume the stored nonce and compare it against the provider's `state`
/// query parameter. The stored value is removed whatever the outcome.
pub fn consume_state<S: StateStash>(
    stash: &S,
    returned: Option<&str>,
) -> Result<(), VimeoError> {
    let saved = stash.take();
    match (saved, returned) {
        (Some(saved), Some(returned)) if saved == returned => Ok(()),
        _ => Err(VimeoError::StateMismatch),
    }
}

/// Complete the Vimeo linking flow: verify the state echo, then exchange
/// the code through the backend under the current session.
pub async fn handle_callback<S: StateStash>(
    stash: &S,
    code: &str,
    returned_state: Option<&str>,
) -> Result<(), VimeoError> {
    consume_state(stash, returned_state)?;
    api::vimeo_callback(code).await?;
    Ok(())
}
