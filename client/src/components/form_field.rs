//! Labelled form row with a field-scoped error line.

use leptos::prelude::*;

use crate::state::draft::Field;

/// Wraps one control with its label and, when failing, its error message.
#[component]
pub fn FormField(
    field: Field,
    #[prop(into)] error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-field" class:form-field--invalid=move || error.get().is_some() data-field=field.name()>
            <label class="form-field__label">{field.label()}</label>
            {children()}
            <Show when=move || error.get().is_some()>
                <p class="form-field__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
