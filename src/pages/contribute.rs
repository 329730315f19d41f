//! Submission form for a new experience entry. Guarded.

use leptos::prelude::*;

use crate::components::extraction_popup::ExtractionPopup;
use crate::components::protected_route::ProtectedRoute;
use crate::net::api;
use crate::net::types::{SubmitRequest, SubmitResponse};

#[component]
pub fn ContributePage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <main class="contribute-page">
                <ContributeForm/>
            </main>
        </ProtectedRoute>
    }
}

#[component]
fn ContributeForm() -> impl IntoView {
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let anonymize = RwSignal::new(false);

    let pending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(false);
    let report = RwSignal::new(None::<SubmitResponse>);

    // Only required-field presence is validated client-side; the control
    // is disabled while a request is outstanding.
    let can_submit = move || {
        !pending.get() && !title.get().trim().is_empty() && !body.get().trim().is_empty()
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !can_submit() {
            return;
        }
        pending.set(true);
        error.set(None);
        success.set(false);
        report.set(None);

        leptos::task::spawn_local(async move {
            let request = SubmitRequest {
                existing_experience_id: None,
                experience_name: title.get_untracked(),
                experience: body.get_untracked(),
                anonymize: anonymize.get_untracked(),
            };
            match api::submit_experience(&request).await {
                Ok(response) => {
                    if !response.fields_extracted.is_empty() {
                        report.set(Some(response));
                    }
                    success.set(true);
                    title.set(String::new());
                    body.set(String::new());
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            pending.set(false);
        });
    };

    view! {
        <div class="contribute-form">
            <header class="contribute-form__header">
                <h2>"Share an entrepreneurial experience"</h2>
                <p>
                    "This can be anything from a single battle to a long journey \
                     spanning multiple ventures."
                </p>
            </header>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="alert alert--error">{message}</div> })
            }}
            <Show when=move || success.get()>
                <div class="alert alert--success">
                    "Your experience has been submitted successfully!"
                </div>
            </Show>

            <form on:submit=on_submit>
                <label class="contribute-form__label">
                    "Give this entry a short and descriptive title"
                    <input
                        class="contribute-form__input"
                        type="text"
                        placeholder="e.g., 'Pivoting to D2C in EdTech', 'Starting a taco truck'"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                        disabled=move || pending.get()
                        required
                    />
                </label>
                <label class="contribute-form__label">
                    "Tell the community about your experience"
                    <textarea
                        class="contribute-form__textarea"
                        placeholder="The more details you can provide, the better."
                        prop:value=move || body.get()
                        on:input=move |ev| body.set(event_target_value(&ev))
                        disabled=move || pending.get()
                        required
                    ></textarea>
                </label>
                <label class="contribute-form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || anonymize.get()
                        on:change=move |ev| anonymize.set(event_target_checked(&ev))
                        disabled=move || pending.get()
                    />
                    "Make this post anonymous"
                </label>
                <div class="contribute-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || !can_submit()>
                        {move || if pending.get() { "Processing..." } else { "Submit" }}
                    </button>
                </div>
            </form>

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
