//! Two-step composer state: editing the draft, then previewing the result.
//!
//! DESIGN
//! ======
//! `ComposerState` is a plain struct so the whole wizard is testable without
//! a reactive runtime; the page wraps it in one `RwSignal`. Transitions:
//!
//! - `Editing --submit(valid)--> Previewing`
//! - `Previewing --edit--> Editing` (draft kept as-is)
//! - `Previewing --accept--> Previewing` (publisher called once)
//!
//! Errors are recomputed on every edit but only surface for fields the user
//! has touched, or for every field once a submit has been attempted.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::draft::{Field, FieldEdit, PostDraft, ValidPost};
use super::schema::{self, ValidationErrors};
use crate::services::generator::ContentGenerator;
use crate::services::publisher::{PublishRequest, Publisher};

/// Wizard position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Editing,
    Previewing,
}

impl Step {
    pub const ALL: [Self; 2] = [Self::Editing, Self::Previewing];

    /// 1-based position shown by the progress bar.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Editing => 1,
            Self::Previewing => 2,
        }
    }

    /// Whether the wizard has got as far as `other`.
    #[must_use]
    pub fn reached(self, other: Self) -> bool {
        self.number() >= other.number()
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Editing => "Create a new post",
            Self::Previewing => "Preview & publish",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub draft: PostDraft,
    pub step: Step,
    pub generated_content: String,
    /// Mirrors `step == Previewing`.
    pub preview_visible: bool,
    errors: BTreeMap<Field, &'static str>,
    touched: BTreeSet<Field>,
    submitted: Option<ValidPost>,
}

impl ComposerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one field edit, mark the field touched and re-run the rules.
    pub fn edit_field(&mut self, edit: FieldEdit) {
        self.touched.insert(edit.field());
        self.draft.apply(edit);
        self.errors = schema::check(&self.draft);
    }

    /// Message to show under `field`, if it is failing and has been touched.
    #[must_use]
    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).copied()
    }

    /// The post accepted by the last successful submit, while previewing.
    #[must_use]
    pub fn submitted(&self) -> Option<&ValidPost> {
        self.submitted.as_ref()
    }

    /// Validate the draft; on success generate content and move to the
    /// preview. Ignored while already previewing.
    ///
    /// # Errors
    ///
    /// Returns the failing fields. The step stays `Editing` and every field
    /// is marked touched so all errors show.
    pub fn submit(&mut self, generator: &dyn ContentGenerator) -> Result<(), ValidationErrors> {
        if self.step != Step::Editing {
            return Ok(());
        }

        self.touched.extend(Field::ALL);
        match schema::validate(&self.draft) {
            Ok(post) => {
                self.errors.clear();
                self.generated_content = generator.generate(&post);
                self.submitted = Some(post);
                self.step = Step::Previewing;
                self.preview_visible = true;
                leptos::logging::log!("composer: draft accepted, previewing");
                Ok(())
            }
            Err(errors) => {
                self.errors = errors.iter().map(|e| (e.field, e.message)).collect();
                leptos::logging::log!("composer: submit blocked: {errors}");
                Err(errors)
            }
        }
    }

    /// Hand the previewed post to `publisher`. The step does not change.
    ///
    /// Returns whether the publisher was called; it is not while editing.
    pub fn accept(&self, publisher: &dyn Publisher) -> bool {
        if self.step != Step::Previewing {
            return false;
        }
        let Some(post) = self.submitted.as_ref() else {
            return false;
        };
        publisher.publish(&PublishRequest { post, content: &self.generated_content });
        true
    }

    /// Back to the form. Field values are kept.
    pub fn edit(&mut self) {
        self.step = Step::Editing;
        self.preview_visible = false;
        self.submitted = None;
    }
}
