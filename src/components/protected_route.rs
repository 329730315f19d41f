//! Declarative gate for routes that require a signed-in user.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// What the guard renders for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    /// The initial session check has not resolved yet.
    Pending,
    /// Resolved with no user: send the visitor to the login view.
    RedirectLogin,
    /// Resolved with a signed-in user: render the guarded content.
    Allow,
}

/// Pure guard decision. While `loading` is set the outcome is always
/// `Pending`, never a redirect, whatever the user field holds.
pub(crate) fn guard_decision(state: &AuthState) -> GuardOutcome {
    if state.loading {
        GuardOutcome::Pending
    } else if state.user.is_none() {
        GuardOutcome::RedirectLogin
    } else {
        GuardOutcome::Allow
    }
}

/// Renders its children only for a signed-in user.
///
/// While the initial session check is pending this shows a neutral
/// placeholder and never redirects; once resolved, an anonymous visitor is
/// sent to the login view. Pure derived state, re-evaluated on every auth
/// change.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        {move || match auth.with(guard_decision) {
            GuardOutcome::Pending => {
                view! { <div class="route-guard__pending">"Loading..."</div> }.into_any()
            }
            GuardOutcome::RedirectLogin => view! { <Redirect path="/login"/> }.into_any(),
            GuardOutcome::Allow => children().into_any(),
        }}
    }
}
