//! Login page with the LinkedIn OAuth button.
//!
//! Also serves as the OAuth redirect target: when the provider sends the
//! browser back with a `code` query parameter, the page exchanges it for a
//! session exactly once; an `error` parameter means the user canceled at
//! the provider.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let processing = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let callback_handled = RwSignal::new(false);

    // Already signed in: go home.
    Effect::new(move || {
        if auth.get().user.is_some() {
            navigate("/", NavigateOptions::default());
        }
    });

    // Exchange a provider-issued code at most once.
    Effect::new(move || {
        let code = query.with(|q| q.get("code"));
        let provider_error = query.with(|q| q.get("error"));
        if callback_handled.get_untracked() {
            return;
        }
        if let Some(code) = code {
            callback_handled.set(true);
            processing.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                let live = crate::app::linkedin_sign_in(auth, code).await;
                if !live {
                    error.set(Some(
                        "Failed to authenticate with LinkedIn. Please try again.".to_owned(),
                    ));
                }
                processing.set(false);
            });
        } else if provider_error.is_some() {
            error.set(Some(
                "LinkedIn authentication was canceled or failed.".to_owned(),
            ));
        }
    });

    let on_linkedin = move |_| {
        processing.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            if crate::app::initiate_linkedin_login().await.is_err() {
                error.set(Some(
                    "Failed to connect to LinkedIn. Please try again.".to_owned(),
                ));
                processing.set(false);
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"triedthat.io"</h1>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="login-page__error">{message}</div> })
            }}

            <button
                class="login-button"
                on:click=on_linkedin
                disabled=move || processing.get()
            >
                {move || if processing.get() { "Processing..." } else { "Continue with LinkedIn" }}
            </button>
        </div>
    }
}
