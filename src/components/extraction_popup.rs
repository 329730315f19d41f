//! Modal report of the backend's field-extraction pass after a submit.

use leptos::prelude::*;

use crate::net::types::SubmitResponse;

/// Dialog listing each extraction field with a found/missing mark.
#[component]
pub fn ExtractionPopup(report: SubmitResponse, on_close: Callback<()>) -> impl IntoView {
    let (found, total) = report.summary();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Extraction Results"</h2>
                <p class="dialog__summary">
                    {format!(
                        "According to our extractor, your writeup addresses {found} out of \
                         {total} relevant areas. You're more than welcome to edit this log \
                         at any time."
                    )}
                </p>
                <ul class="dialog__fields">
                    {report
                        .fields_extracted
                        .iter()
                        .map(|(field, present)| {
                            let class = if *present {
                                "dialog__field dialog__field--found"
                            } else {
                                "dialog__field dialog__field--missing"
                            };
                            let mark = if *present { "✓" } else { "✗" };
                            view! {
                                <li class=class>
                                    <span class="dialog__mark">{mark}</span>
                                    {field.clone()}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
