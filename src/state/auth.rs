#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current user and loading status.
///
/// Provided as an `RwSignal` context from `App`; only the session
/// operations in `app.rs` write it. `loading` starts `true` because the
/// initial check is pending when the app mounts, and is cleared once that
/// check resolves, whatever the outcome. A non-null `user` implies a
/// previously validated access token is stored; the converse does not
/// hold.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Whether the given entry author id belongs to the signed-in user.
    pub fn owns(&self, author_id: Option<i64>) -> bool {
        match (&self.user, author_id) {
            (Some(user), Some(id)) => user.user_id == id,
            _ => false,
        }
    }
}
