//! Public browse page listing all entries.

use leptos::prelude::*;

use crate::components::entry_list::EntryList;

#[component]
pub fn BrowsePage() -> impl IntoView {
    view! {
        <main class="browse-page">
            <section class="browse-page__header">
                <p>"Browse recent entries"</p>
            </section>
            <EntryList/>
        </main>
    }
}
