//! Select control over a closed option set.

use leptos::prelude::*;

/// `<select>` with a disabled placeholder entry shown until something is
/// picked. Emits the raw option value; callers parse it.
#[component]
pub fn ChoiceSelect(
    options: Vec<(&'static str, &'static str)>,
    placeholder: &'static str,
    #[prop(into)] value: Signal<&'static str>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="choice-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" disabled=true selected=move || value.get().is_empty()>
                {placeholder}
            </option>
            {options
                .into_iter()
                .map(|(option_value, label)| view! { <option value=option_value>{label}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
