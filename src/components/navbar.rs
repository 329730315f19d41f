//! Top navigation bar with auth-dependent links and account actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::state::auth::AuthState;

/// Navigation bar. Signed-out visitors get a login link; signed-in users
/// get the section links plus logout and delete-account actions.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let show_delete = RwSignal::new(false);
    let delete_pending = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    let on_logout = {
        let navigate = navigate.clone();
        move |_| {
            crate::app::sign_out(auth);
            navigate("/", NavigateOptions::default());
        }
    };

    let on_confirm_delete = Callback::new({
        move |()| {
            let navigate = navigate.clone();
            delete_pending.set(true);
            delete_error.set(None);
            leptos::task::spawn_local(async move {
                match api::delete_account().await {
                    Ok(()) => {
                        crate::app::sign_out(auth);
                        show_delete.set(false);
                        delete_pending.set(false);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        delete_error.set(Some(err.to_string()));
                        delete_pending.set(false);
                    }
                }
            });
        }
    });

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "triedthat.io"
            </a>
            <div class="navbar__links">
                {move || {
                    if auth.get().user.is_some() {
                        view! {
                            <a class="navbar__link" href="/contribute">
                                "Submit"
                            </a>
                            <a class="navbar__link" href="/browse">
                                "Browse recent"
                            </a>
                            <a class="navbar__link" href="/my-entries">
                                "My entries"
                            </a>
                            <button class="navbar__button" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                            <button
                                class="navbar__button navbar__button--danger"
                                on:click=move |_| show_delete.set(true)
                            >
                                "Delete my data"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class="navbar__link" href="/login">
                                "Log in with LinkedIn"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || show_delete.get()>
                <DeleteAccountDialog
                    pending=delete_pending
                    error=delete_error
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| show_delete.set(false))
                />
            </Show>
        </nav>
    }
}

/// Confirmation dialog for the irreversible delete-account action.
#[component]
fn DeleteAccountDialog(
    pending: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Account"</h2>
                <p class="dialog__summary">
                    "Are you sure you would like to delete all your data from \
                     triedthat.io? This action is irreversible."
                </p>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <p class="dialog__error">{message}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(()) disabled=move || pending.get()>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
