use super::*;
use crate::net::types::UserProfile;

fn profile(user_id: i64) -> UserProfile {
    UserProfile {
        user_id,
        email: None,
        first_name: None,
        last_name: None,
        profile_picture_url: None,
    }
}

#[test]
fn pending_check_never_redirects() {
    // The state at mount: anonymous but still loading. Redirecting here
    // would bounce a signed-in user off a deep link before the first
    // check resolves.
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(guard_decision(&state), GuardOutcome::Pending);
}

#[test]
fn pending_check_with_user_is_still_pending() {
    let state = AuthState {
        user: Some(profile(1)),
        loading: true,
    };
    assert_eq!(guard_decision(&state), GuardOutcome::Pending);
}

#[test]
fn resolved_anonymous_redirects_to_login() {
    let state = AuthState {
        user: None,
        loading: false,
    };
    assert_eq!(guard_decision(&state), GuardOutcome::RedirectLogin);
}

#[test]
fn resolved_user_is_allowed_through() {
    let state = AuthState {
        user: Some(profile(1)),
        loading: false,
    };
    assert_eq!(guard_decision(&state), GuardOutcome::Allow);
}
