//! The signed-in user's own entries. Guarded.

use leptos::prelude::*;

use crate::components::entry_list::EntryList;
use crate::components::protected_route::ProtectedRoute;
use crate::state::auth::AuthState;

#[component]
pub fn MyEntriesPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <main class="entries-page">
                <section class="entries-page__header">
                    <p>"Your entries"</p>
                </section>
                <MyEntriesList/>
            </main>
        </ProtectedRoute>
    }
}

/// List scoped to the current user; the guard guarantees one is present.
#[component]
fn MyEntriesList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        auth.get()
            .user
            .map(|user| view! { <EntryList user_id=user.user_id/> })
    }
}
