//! Page shell: navbar above routed content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn MainLayout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <div class="layout__content">{children()}</div>
        </div>
    }
}
