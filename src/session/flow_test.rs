use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;
use crate::session::store::{MemoryTokens, TokenStore};

// =============================================================
// Scripted transport fake
// =============================================================

#[derive(Default)]
struct ScriptedApi {
    me_script: RefCell<VecDeque<MeOutcome>>,
    refresh_script: RefCell<VecDeque<Option<String>>>,
    me_calls: Cell<usize>,
    refresh_calls: Cell<usize>,
    last_me_token: RefCell<Option<String>>,
}

impl ScriptedApi {
    fn me(self, outcome: MeOutcome) -> Self {
        self.me_script.borrow_mut().push_back(outcome);
        self
    }

    fn refresh(self, result: Option<&str>) -> Self {
        self.refresh_script
            .borrow_mut()
            .push_back(result.map(str::to_owned));
        self
    }
}

impl AuthApi for ScriptedApi {
    async fn fetch_me(&self, access: &str) -> MeOutcome {
        self.me_calls.set(self.me_calls.get() + 1);
        self.last_me_token.replace(Some(access.to_owned()));
        self.me_script
            .borrow_mut()
            .pop_front()
            .unwrap_or(MeOutcome::Failed("script exhausted".to_owned()))
    }

    async fn refresh(&self, _refresh: &str) -> Option<String> {
        self.refresh_calls.set(self.refresh_calls.get() + 1);
        self.refresh_script.borrow_mut().pop_front().flatten()
    }
}

fn profile(user_id: i64) -> UserProfile {
    UserProfile {
        user_id,
        email: None,
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        profile_picture_url: None,
    }
}

// =============================================================
// check_auth
// =============================================================

#[test]
fn no_stored_token_is_anonymous_without_any_call() {
    let store = MemoryTokens::default();
    let api = ScriptedApi::default();

    for _ in 0..3 {
        assert!(block_on(check_auth(&store, &api)).is_none());
    }
    assert_eq!(api.me_calls.get(), 0);
    assert_eq!(api.refresh_calls.get(), 0);
}

#[test]
fn valid_token_resolves_profile_without_refresh() {
    let store = MemoryTokens::with_tokens("acc", "ref");
    let api = ScriptedApi::default().me(MeOutcome::Ok(profile(1)));

    let user = block_on(check_auth(&store, &api));
    assert_eq!(user, Some(profile(1)));
    assert_eq!(api.me_calls.get(), 1);
    assert_eq!(api.refresh_calls.get(), 0);
    assert_eq!(store.access_token().as_deref(), Some("acc"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref"));
}

#[test]
fn unauthorized_triggers_single_refresh_and_single_retry() {
    let store = MemoryTokens::with_tokens("stale", "ref");
    let api = ScriptedApi::default()
        .me(MeOutcome::Unauthorized)
        .me(MeOutcome::Ok(profile(7)))
        .refresh(Some("fresh"));

    let user = block_on(check_auth(&store, &api));
    assert_eq!(user, Some(profile(7)));
    assert_eq!(api.me_calls.get(), 2);
    assert_eq!(api.refresh_calls.get(), 1);
    // The retry used, and storage now holds, the refreshed token.
    assert_eq!(api.last_me_token.borrow().as_deref(), Some("fresh"));
    assert_eq!(store.access_token().as_deref(), Some("fresh"));
}

#[test]
fn refresh_rejection_clears_the_session() {
    let store = MemoryTokens::with_tokens("stale", "ref");
    let api = ScriptedApi::default()
        .me(MeOutcome::Unauthorized)
        .refresh(None);

    assert!(block_on(check_auth(&store, &api)).is_none());
    assert_eq!(api.me_calls.get(), 1);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn retry_rejection_clears_the_session() {
    let store = MemoryTokens::with_tokens("stale", "ref");
    let api = ScriptedApi::default()
        .me(MeOutcome::Unauthorized)
        .me(MeOutcome::Unauthorized)
        .refresh(Some("fresh"));

    assert!(block_on(check_auth(&store, &api)).is_none());
    assert_eq!(api.me_calls.get(), 2);
    assert_eq!(api.refresh_calls.get(), 1);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn missing_refresh_token_clears_the_session() {
    let store = MemoryTokens::default();
    store.set_access_token("stale");
    let api = ScriptedApi::default().me(MeOutcome::Unauthorized);

    assert!(block_on(check_auth(&store, &api)).is_none());
    assert_eq!(api.refresh_calls.get(), 0);
    assert!(store.access_token().is_none());
}

#[test]
fn transport_failure_clears_without_refresh_attempt() {
    let store = MemoryTokens::with_tokens("acc", "ref");
    let api = ScriptedApi::default().me(MeOutcome::Failed("connection reset".to_owned()));

    assert!(block_on(check_auth(&store, &api)).is_none());
    assert_eq!(api.refresh_calls.get(), 0);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

// =============================================================
// refresh_access
// =============================================================

#[test]
fn refresh_persists_new_access_token() {
    let store = MemoryTokens::with_tokens("old", "ref");
    let api = ScriptedApi::default().refresh(Some("new"));

    assert_eq!(
        block_on(refresh_access(&store, &api)).as_deref(),
        Some("new")
    );
    assert_eq!(store.access_token().as_deref(), Some("new"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref"));
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_persists_tokens_then_resolves_profile() {
    let store = MemoryTokens::default();
    let api = ScriptedApi::default().me(MeOutcome::Ok(profile(3)));
    let tokens = TokenPair {
        access_token: "acc".to_owned(),
        refresh_token: "ref".to_owned(),
    };

    let user = block_on(login(&store, &api, &tokens));
    assert_eq!(user, Some(profile(3)));
    assert_eq!(api.last_me_token.borrow().as_deref(), Some("acc"));
    assert_eq!(store.refresh_token().as_deref(), Some("ref"));
}

#[test]
fn login_with_unusable_tokens_leaves_session_cleared() {
    let store = MemoryTokens::default();
    let api = ScriptedApi::default()
        .me(MeOutcome::Unauthorized)
        .refresh(None);
    let tokens = TokenPair {
        access_token: "acc".to_owned(),
        refresh_token: "ref".to_owned(),
    };

    assert!(block_on(login(&store, &api, &tokens)).is_none());
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryTokens::with_tokens("acc", "ref");

    logout(&store);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());

    // Second call from the already-anonymous state is a no-op.
    logout(&store);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}
