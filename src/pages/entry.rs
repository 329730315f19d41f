//! Entry detail view with owner-only edit and delete.
//!
//! The entry is fetched on mount by id; `?edit=1` opens the view in edit
//! mode directly (the pencil link on list cards points here). A lookup
//! that does not yield exactly one result renders as "not found". A saved
//! edit is folded into the displayed copy without refetching, so the
//! extraction report dialog stays up over the refreshed content.

#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::components::extraction_popup::ExtractionPopup;
use crate::net::api::{self, ApiError};
use crate::net::types::{Experience, SubmitRequest, SubmitResponse};
use crate::state::auth::AuthState;

#[component]
pub fn EntryPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    let id = Memo::new(move |_| {
        params.with(|p| p.get("experienceId").and_then(|v| v.parse::<i64>().ok()))
    });

    let entry = LocalResource::new(move || {
        let id = id.get();
        async move {
            match id {
                Some(id) => api::fetch_experience(id).await,
                None => Err(ApiError::NotFound),
            }
        }
    });

    let edit_mode = RwSignal::new(false);
    Effect::new(move || {
        if query.with(|q| q.get("edit").as_deref() == Some("1")) {
            edit_mode.set(true);
        }
    });

    view! {
        <main class="entry-page">
            <Suspense fallback=move || view! { <p class="entry-page__loading">"Loading..."</p> }>
                {move || {
                    entry
                        .get()
                        .map(|result| match result {
                            Err(_) => {
                                view! { <p class="entry-page__missing">"Entry not found."</p> }
                                    .into_any()
                            }
                            Ok(experience) => {
                                view! { <EntryDetail experience=experience edit_mode=edit_mode/> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </main>
    }
}

/// Fold a successfully submitted draft back into the displayed entry.
/// Author attribution is left untouched; the backend only changes it on
/// the next full fetch.
pub(crate) fn apply_submitted_draft(entry: &mut Experience, draft: &SubmitRequest) {
    entry.name = draft.experience_name.clone();
    entry.raw_text = draft.experience.clone();
    entry.anonymize = draft.anonymize;
}

/// Detail card for one fetched entry.
#[component]
fn EntryDetail(experience: Experience, edit_mode: RwSignal<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let experience_id = experience.id;
    let author_id = experience.user_id;
    let author = experience.author_name();
    let avatar = experience.profile_picture_url.clone();
    let created_at = experience.created_at.clone().unwrap_or_default();

    // Edit draft, pre-filled from the fetched entry.
    let title = RwSignal::new(experience.name.clone());
    let body = RwSignal::new(experience.raw_text.clone());
    let anonymize = RwSignal::new(experience.anonymize);

    // The displayed copy, updated in place after a saved edit.
    let shown = RwSignal::new(experience);

    let saving = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);
    let report = RwSignal::new(None::<SubmitResponse>);

    let show_delete = RwSignal::new(false);
    let delete_pending = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    let can_edit = move || auth.get().owns(author_id);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() || body.get().trim().is_empty() {
            return;
        }
        saving.set(true);
        save_error.set(None);
        report.set(None);

        leptos::task::spawn_local(async move {
            let request = SubmitRequest {
                existing_experience_id: Some(experience_id),
                experience_name: title.get_untracked(),
                experience: body.get_untracked(),
                anonymize: anonymize.get_untracked(),
            };
            match api::submit_experience(&request).await {
                Ok(response) => {
                    shown.update(|entry| apply_submitted_draft(entry, &request));
                    if !response.fields_extracted.is_empty() {
                        report.set(Some(response));
                    }
                    edit_mode.set(false);
                }
                Err(err) => save_error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let on_delete = Callback::new(move |()| {
        let navigate = navigate.clone();
        delete_pending.set(true);
        delete_error.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_experience(experience_id).await {
                Ok(()) => {
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
    });

    view! {
        <div class="entry-detail">
            <div class="entry-detail__author">
                {avatar
                    .map(|url| {
                        view! { <img class="entry-detail__avatar" src=url alt=author.clone()/> }
                    })}
                <span class="entry-detail__author-name">{author.clone()}</span>
            </div>

            <Show when=move || can_edit() && !edit_mode.get()>
                <div class="entry-detail__actions">
                    <button
                        class="entry-detail__icon"
                        title="Edit"
                        on:click=move |_| edit_mode.set(true)
                    >
                        "✎"
                    </button>
                    <button
                        class="entry-detail__icon entry-detail__icon--danger"
                        title="Delete"
                        on:click=move |_| show_delete.set(true)
                    >
                        "🗑"
                    </button>
                </div>
            </Show>

            <Show
                when=move || edit_mode.get() && can_edit()
                fallback=move || {
                    view! {
                        <div class="entry-detail__body">
                            <h3>{move || shown.with(|entry| entry.name.clone())}</h3>
                            <div class="entry-detail__date">{created_at.clone()}</div>
                            <div class="entry-detail__text">
                                {move || shown.with(|entry| entry.raw_text.clone())}
                            </div>
                        </div>
                    }
                }
            >
                <form class="entry-detail__form" on:submit=on_save>
                    <label class="entry-detail__label">
                        "Title"
                        <input
                            class="entry-detail__input"
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                            disabled=move || saving.get()
                            required
                        />
                    </label>
                    <label class="entry-detail__label">
                        "Body"
                        <textarea
                            class="entry-detail__textarea"
                            prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev))
                            disabled=move || saving.get()
                            required
                        ></textarea>
                    </label>
                    <label class="entry-detail__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || anonymize.get()
                            on:change=move |ev| anonymize.set(event_target_checked(&ev))
                            disabled=move || saving.get()
                        />
                        "Make this post anonymous"
                    </label>
                    {move || {
                        save_error
                            .get()
                            .map(|message| view! { <p class="entry-detail__error">{message}</p> })
                    }}
                    <div class="entry-detail__form-actions">
                        <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Submit" }}
                        </button>
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| edit_mode.set(false)
                            disabled=move || saving.get()
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || show_delete.get()>
                <div class="dialog-backdrop" on:click=move |_| show_delete.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete entry"</h2>
                        <p class="dialog__summary">
                            "Are you sure you would like to delete this entry?"
                        </p>
                        {move || {
                            delete_error
                                .get()
                                .map(|message| view! { <p class="dialog__error">{message}</p> })
                        }}
                        <div class="dialog__actions">
                            <button
                                class="btn"
                                on:click=move |_| show_delete.set(false)
                                disabled=move || delete_pending.get()
                            >
                                "No"
                            </button>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| on_delete.run(())
                                disabled=move || delete_pending.get()
                            >
                                {move || if delete_pending.get() { "Deleting..." } else { "Yes" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            {move || {
                report
                    .get()
                    .map(|resp| {
                        view! {
                            <ExtractionPopup
                                report=resp
                                on_close=Callback::new(move |()| report.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
