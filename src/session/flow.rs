//! The session check/refresh state machine.
//!
//! `check_auth` is the single validation path: it resolves the current
//! user from the stored access token, attempting exactly one refresh and
//! one retry on a 401. Every non-recoverable outcome ends with the stored
//! session cleared. The periodic ticker, the visibility listener, and
//! explicit logins all funnel into these functions; each is idempotent
//! with respect to the final state, so overlapping invocations are safe.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use crate::net::types::{TokenPair, UserProfile};
use crate::session::store::TokenStore;

/// Outcome of a `GET /api/me` call.
///
/// `Unauthorized` (a 401) is the only recoverable failure; everything
/// else, network errors included, lands in `Failed`. Both paths clear the
/// session, matching the backend's contract that a token is valid only if
/// it can resolve a profile right now, but they are reported distinctly.
#[derive(Clone, Debug)]
pub enum MeOutcome {
    Ok(UserProfile),
    Unauthorized,
    Failed(String),
}

/// Transport seam for the two endpoints the session flow depends on.
pub trait AuthApi {
    /// `GET /api/me` with the access token as bearer credential.
    async fn fetch_me(&self, access: &str) -> MeOutcome;
    /// `POST /api/refresh` with the refresh token as bearer credential;
    /// returns the new access token on success.
    async fn refresh(&self, refresh: &str) -> Option<String>;
}

/// Validate the stored session and resolve the current user.
///
/// With no stored access token this reports anonymous without touching
/// storage. A 401 triggers exactly one refresh attempt and at most one
/// retried profile fetch; any failure along that path, or any non-401
/// failure, clears the whole session.
pub async fn check_auth<S: TokenStore, A: AuthApi>(store: &S, api: &A) -> Option<UserProfile> {
    let Some(access) = store.access_token() else {
        return None;
    };

    match api.fetch_me(&access).await {
        MeOutcome::Ok(profile) => Some(profile),
        MeOutcome::Unauthorized => {
            let Some(new_access) = refresh_access(store, api).await else {
                store.clear();
                return None;
            };
            match api.fetch_me(&new_access).await {
                MeOutcome::Ok(profile) => Some(profile),
                MeOutcome::Unauthorized | MeOutcome::Failed(_) => {
                    store.clear();
                    None
                }
            }
        }
        MeOutcome::Failed(reason) => {
            leptos::logging::warn!("auth check failed: {reason}");
            store.clear();
            None
        }
    }
}

/// Exchange the stored refresh token for a new access token.
///
/// Persists and returns the new access token on success; clears the
/// session and returns `None` when no refresh token is stored or the
/// exchange is rejected. Safe to call repeatedly, though `check_auth`
/// invokes it at most once per cycle.
pub async fn refresh_access<S: TokenStore, A: AuthApi>(store: &S, api: &A) -> Option<String> {
    let Some(refresh) = store.refresh_token() else {
        store.clear();
        return None;
    };

    match api.refresh(&refresh).await {
        Some(access) => {
            store.set_access_token(&access);
            Some(access)
        }
        None => {
            store.clear();
            None
        }
    }
}

/// Persist a freshly issued token pair and validate it.
///
/// On failure to resolve a profile the session is left cleared by
/// `check_auth` itself.
pub async fn login<S: TokenStore, A: AuthApi>(
    store: &S,
    api: &A,
    tokens: &TokenPair,
) -> Option<UserProfile> {
    store.save(&tokens.access_token, &tokens.refresh_token);
    check_auth(store, api).await
}

/// Drop the stored session unconditionally. Idempotent.
pub fn logout<S: TokenStore>(store: &S) {
    store.clear();
}
