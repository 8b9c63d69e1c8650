//! Post composer page: the form step and the preview step.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `RwSignal<ComposerState>` and routes every DOM event
//! through its methods. The generator and publisher come from context
//! (`ComposerServices`), falling back to the built-in stand-ins.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;
use time::Date;

use crate::components::choice_select::ChoiceSelect;
use crate::components::form_field::FormField;
use crate::components::post_preview::PostPreview;
use crate::components::step_progress::StepProgress;
use crate::services::ComposerServices;
use crate::state::composer::{ComposerState, Step};
use crate::state::draft::{Choice, Fanpage, Field, FieldEdit, Tone, Topic};
use crate::util::date;

/// Top-level composer view. Takes no props; each mount has its own state.
#[component]
pub fn PostComposer() -> impl IntoView {
    let services = use_context::<ComposerServices>().unwrap_or_default();
    let state = RwSignal::new(ComposerState::new());
    let step = Signal::derive(move || state.with(|s| s.step));

    let generator = services.generator.clone();
    let on_submit = Callback::new(move |()| {
        state.update(|s| {
            if let Err(errors) = s.submit(generator.as_ref()) {
                leptos::logging::log!("composer: {} field(s) need attention", errors.len());
            }
        });
    });

    let publisher = services.publisher.clone();
    let on_accept = Callback::new(move |()| {
        let published = state.with_untracked(|s| s.accept(publisher.as_ref()));
        if !published {
            leptos::logging::warn!("composer: accept ignored outside preview");
        }
    });

    let on_edit = Callback::new(move |()| state.update(ComposerState::edit));

    view! {
        <div class="composer">
            <header class="composer__header">
                <StepProgress step=step/>
                <h2 class="composer__title">{move || step.get().heading()}</h2>
            </header>
            <Show
                when=move || step.get() == Step::Editing
                fallback=move || view! { <ComposerPreview state=state on_accept=on_accept on_edit=on_edit/> }
            >
                <ComposerForm state=state on_submit=on_submit/>
            </Show>
        </div>
    }
}

/// Step 1: the validated form.
#[component]
fn ComposerForm(state: RwSignal<ComposerState>, on_submit: Callback<()>) -> impl IntoView {
    let edit = move |change: FieldEdit| state.update(|s| s.edit_field(change));
    let error = move |field: Field| Signal::derive(move || state.with(|s| s.error_for(field)));

    let topic = Signal::derive(move || select_value(state.with(|s| s.draft.topic)));
    let tone = Signal::derive(move || select_value(state.with(|s| s.draft.tone)));
    let fanpage = Signal::derive(move || select_value(state.with(|s| s.draft.fanpage)));
    let post_date = move || state.with(|s| s.draft.post_date);

    let min_date = date::to_input(date::today());

    view! {
        <form
            class="composer-form"
            novalidate=true
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <FormField field=Field::Title error=error(Field::Title)>
                <input
                    class="composer-form__input"
                    type="text"
                    placeholder="Enter a post title..."
                    prop:value=move || state.with(|s| s.draft.title.clone())
                    on:input=move |ev| edit(FieldEdit::Title(event_target_value(&ev)))
                />
            </FormField>

            <div class="composer-form__row">
                <FormField field=Field::Topic error=error(Field::Topic)>
                    <ChoiceSelect
                        options=Topic::options()
                        placeholder="Choose a topic"
                        value=topic
                        on_change=Callback::new(move |raw: String| edit(FieldEdit::Topic(Topic::from_value(&raw))))
                    />
                </FormField>
                <FormField field=Field::Tone error=error(Field::Tone)>
                    <ChoiceSelect
                        options=Tone::options()
                        placeholder="Choose a tone"
                        value=tone
                        on_change=Callback::new(move |raw: String| edit(FieldEdit::Tone(Tone::from_value(&raw))))
                    />
                </FormField>
            </div>

            <FormField field=Field::Content error=error(Field::Content)>
                <textarea
                    class="composer-form__textarea"
                    placeholder="Introduce our new product with an attractive offer..."
                    prop:value=move || state.with(|s| s.draft.content.clone())
                    on:input=move |ev| edit(FieldEdit::Content(event_target_value(&ev)))
                ></textarea>
            </FormField>

            <div class="composer-form__row">
                <FormField field=Field::Image error=error(Field::Image)>
                    <input
                        class="composer-form__input"
                        type="url"
                        placeholder="Enter an image URL..."
                        prop:value=move || state.with(|s| s.draft.image.clone())
                        on:input=move |ev| edit(FieldEdit::Image(event_target_value(&ev)))
                    />
                    <div class="composer-form__dropzone">
                        <p>"Drag and drop or click to upload an image"</p>
                    </div>
                </FormField>
                <FormField field=Field::Fanpage error=error(Field::Fanpage)>
                    <ChoiceSelect
                        options=Fanpage::options()
                        placeholder="Choose a fanpage"
                        value=fanpage
                        on_change=Callback::new(move |raw: String| {
                            edit(FieldEdit::Fanpage(Fanpage::from_value(&raw)));
                        })
                    />
                </FormField>
            </div>

            <FormField field=Field::PostDate error=error(Field::PostDate)>
                <input
                    class="composer-form__input"
                    type="date"
                    min=min_date
                    prop:value=move || post_date().map(date::to_input).unwrap_or_default()
                    on:input=move |ev| edit(FieldEdit::PostDate(date::parse_input(&event_target_value(&ev))))
                />
                <span class="composer-form__date-label" class:composer-form__date-label--empty=move || post_date().is_none()>
                    {move || date_label(post_date())}
                </span>
            </FormField>

            <button type="submit" class="btn btn--primary composer-form__submit">
                "Generate content with AI"
            </button>
        </form>
    }
}

/// Step 2: the generated copy and the publish / edit actions.
#[component]
fn ComposerPreview(state: RwSignal<ComposerState>, on_accept: Callback<()>, on_edit: Callback<()>) -> impl IntoView {
    let content = Signal::derive(move || state.with(|s| s.generated_content.clone()));
    let schedule = move || {
        state.with(|s| {
            s.submitted()
                .map(|post| schedule_line(post.fanpage, post.post_date))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="composer-preview">
            <PostPreview content=content/>
            <p class="composer-preview__schedule">{schedule}</p>
            <div class="composer-preview__actions">
                <button class="btn btn--primary" on:click=move |_| on_accept.run(())>
                    "Looks good - publish to fanpage"
                </button>
                <button class="btn" on:click=move |_| on_edit.run(())>
                    "Edit / give AI feedback"
                </button>
            </div>
        </div>
    }
}

/// Wire value for a select bound to an optional choice.
fn select_value<C: Choice>(choice: Option<C>) -> &'static str {
    choice.map_or("", C::value)
}

/// Text next to the date input.
fn date_label(value: Option<Date>) -> String {
    value.map_or_else(|| "Pick a publish date".to_owned(), date::display)
}

fn schedule_line(fanpage: Fanpage, post_date: Date) -> String {
    format!("Scheduled for {} on {}", fanpage.label(), date::display(post_date))
}
