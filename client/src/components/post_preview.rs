//! Read-only card showing generated post copy.

#[cfg(test)]
#[path = "post_preview_test.rs"]
mod post_preview_test;

use leptos::prelude::*;

/// Card with an illustration placeholder above the post text.
///
/// Stateless; any string renders, including an empty one.
#[component]
pub fn PostPreview(#[prop(into)] content: Signal<String>) -> impl IntoView {
    view! {
        <article class="post-preview">
            <header class="post-preview__header">
                <h3 class="post-preview__title">"Post preview"</h3>
            </header>
            <div class="post-preview__body">
                <div class="post-preview__image">
                    <span class="post-preview__image-label">"Illustration"</span>
                </div>
                <p class="post-preview__text">{move || content.get()}</p>
            </div>
        </article>
    }
}
