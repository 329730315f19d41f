//! Root application component: routing, auth context, session upkeep.
//!
//! The auth signal provided here is written only by the session operations
//! in this module; every view reads it reactively. Two independent
//! triggers re-validate a live session — a five-minute ticker and the
//! tab-visibility listener — and both funnel into the same idempotent
//! check, so overlapping runs are harmless.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::main_layout::MainLayout;
use crate::net::api::{self, ApiError, GlooAuthApi};
use crate::net::types::TokenPair;
use crate::pages::{
    browse::BrowsePage, contribute::ContributePage, entry::EntryPage, landing::LandingPage,
    login::LoginPage, my_entries::MyEntriesPage,
};
use crate::session::flow;
use crate::session::store::BrowserTokens;
use crate::state::auth::AuthState;

#[cfg(feature = "hydrate")]
const CHECK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5 * 60);

/// Run one session validation cycle and publish the outcome.
///
/// Always clears `loading`, whatever the result, so consumers can tell
/// "still checking" from "checked, no session".
pub async fn run_check(auth: RwSignal<AuthState>) {
    let profile = flow::check_auth(&BrowserTokens, &GlooAuthApi).await;
    auth.update(|state| {
        state.user = profile;
        state.loading = false;
    });
}

/// Persist a freshly issued token pair and resolve the profile.
///
/// Returns `true` when the session is live afterwards; on failure the
/// stored session has already been cleared.
pub async fn sign_in(auth: RwSignal<AuthState>, tokens: TokenPair) -> bool {
    let profile = flow::login(&BrowserTokens, &GlooAuthApi, &tokens).await;
    let live = profile.is_some();
    auth.update(|state| {
        state.user = profile;
        state.loading = false;
    });
    live
}

/// Drop the session. Safe to call from an already-anonymous state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    flow::logout(&BrowserTokens);
    auth.update(|state| {
        state.user = None;
        state.loading = false;
    });
}

/// Ask the backend for the LinkedIn authorization URL and redirect to it.
pub async fn initiate_linkedin_login() -> Result<(), ApiError> {
    let url = api::linkedin_auth_url().await?;
    crate::services::full_page_redirect(&url);
    Ok(())
}

/// Exchange a LinkedIn authorization code and sign in with the result.
pub async fn linkedin_sign_in(auth: RwSignal<AuthState>, code: String) -> bool {
    match api::linkedin_callback(&code).await {
        Ok(tokens) => sign_in(auth, tokens).await,
        Err(err) => {
            leptos::logging::warn!("LinkedIn callback failed: {err}");
            false
        }
    }
}

/// Whether any session signal (stored token or resolved user) exists.
/// Re-validation is skipped without one so a logged-out tab does not poll.
#[cfg(feature = "hydrate")]
fn session_signal_present(auth: RwSignal<AuthState>) -> bool {
    use crate::session::store::TokenStore;
    auth.get_untracked().user.is_some() || BrowserTokens.access_token().is_some()
}

/// Periodic and visibility-triggered re-validation of a live session.
#[cfg(feature = "hydrate")]
fn spawn_session_upkeep(auth: RwSignal<AuthState>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(CHECK_INTERVAL).await;
            if session_signal_present(auth) {
                run_check(auth).await;
            }
        }
    });

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let listener = Closure::<dyn FnMut()>::new(move || {
        let visible = web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.visibility_state() == web_sys::VisibilityState::Visible)
            .unwrap_or(false);
        if visible && session_signal_present(auth) {
            leptos::task::spawn_local(run_check(auth));
        }
    });
    let _ = document
        .add_event_listener_with_callback("visibilitychange", listener.as_ref().unchecked_ref());
    listener.forget();
}

/// Root application component.
///
/// Provides the auth context, kicks off the initial session check, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(run_check(auth));
        spawn_session_upkeep(auth);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // No storage to consult outside the browser; resolve to anonymous.
        auth.update(|state| state.loading = false);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/triedthat.css"/>
        <Title text="triedthat.io"/>

        <Router>
            <MainLayout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("browse") view=BrowsePage/>
                    <Route path=(StaticSegment("entry"), ParamSegment("experienceId")) view=EntryPage/>
                    <Route path=StaticSegment("contribute") view=ContributePage/>
                    <Route path=StaticSegment("my-entries") view=MyEntriesPage/>
                    // LinkedIn OAuth redirect target reuses the login view.
                    <Route
                        path=(
                            StaticSegment("api"),
                            StaticSegment("auth"),
                            StaticSegment("linkedin"),
                            StaticSegment("callback"),
                        )
                        view=LoginPage
                    />
                </Routes>
            </MainLayout>
        </Router>
    }
}
