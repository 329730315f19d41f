//! Experience entry list with optional author/count scoping.
//!
//! Fetches on mount; unauthenticated visitors see the same entries but no
//! edit affordances. Each view re-fetches independently — there is no
//! cross-view cache.

#[cfg(test)]
#[path = "entry_list_test.rs"]
mod entry_list_test;

use leptos::prelude::*;

use crate::net::api::{self, ExperienceFilter};
use crate::net::types::Experience;
use crate::state::auth::AuthState;

/// Flatten an entry body to a single preview line, ellipsized at
/// `max_chars`.
pub(crate) fn preview_line(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() > max_chars {
        let mut preview: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
        preview.push('…');
        preview
    } else {
        flat
    }
}

/// Card list of entries, scoped by author and count when given.
#[component]
pub fn EntryList(
    #[prop(optional)] user_id: Option<i64>,
    #[prop(optional)] max_number: Option<u32>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let entries = LocalResource::new(move || {
        api::fetch_experiences(ExperienceFilter {
            experience_id: None,
            user_id,
            max_number,
        })
    });

    view! {
        <div class="entry-list">
            <Suspense fallback=move || view! { <p class="entry-list__loading">"Loading entries..."</p> }>
                {move || {
                    entries
                        .get()
                        .map(|result| match result {
                            Err(err) => {
                                view! { <p class="entry-list__error">{err.to_string()}</p> }
                                    .into_any()
                            }
                            Ok(list) if list.is_empty() => {
                                view! { <p class="entry-list__empty">"No entries found."</p> }
                                    .into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <div class="entry-list__cards">
                                        {list
                                            .into_iter()
                                            .map(|entry| {
                                                let own = auth.get().owns(entry.user_id);
                                                view! { <EntryCard entry=entry own=own/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One entry card: title, preview line, and an edit pencil for the owner.
#[component]
fn EntryCard(entry: Experience, own: bool) -> impl IntoView {
    let preview = preview_line(&entry.raw_text, 80);
    let detail_href = format!("/entry/{}", entry.id);
    let edit_href = format!("/entry/{}?edit=1", entry.id);

    view! {
        <div class="entry-card">
            {own
                .then(|| {
                    view! {
                        <a class="entry-card__edit" href=edit_href title="Edit">
                            "✎"
                        </a>
                    }
                })}
            <a class="entry-card__link" href=detail_href>
                <h3 class="entry-card__title">{entry.name}</h3>
                <p class="entry-card__preview">{preview}</p>
            </a>
        </div>
    }
}
