//! Public landing page with the recently-shared entries.

use leptos::prelude::*;

use crate::components::entry_list::EntryList;

/// How many entries the landing teaser shows; the browse page lists all.
const RECENT_ENTRIES: u32 = 10;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="landing-page">
            <section class="landing-page__hero">
                <h1>"Welcome to triedthat.io"</h1>
                <p>"Recently-shared experiences"</p>
            </section>
            <EntryList max_number=RECENT_ENTRIES/>
        </main>
    }
}
