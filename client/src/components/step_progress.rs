//! Two-segment wizard progress bar.

use leptos::prelude::*;

use crate::state::composer::Step;

/// One bar segment per step; segments up to the current step are lit.
#[component]
pub fn StepProgress(#[prop(into)] step: Signal<Step>) -> impl IntoView {
    view! {
        <div class="step-progress">
            {Step::ALL
                .into_iter()
                .map(|segment| {
                    view! {
                        <div
                            class="step-progress__segment"
                            class:step-progress__segment--active=move || step.get().reached(segment)
                        ></div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
