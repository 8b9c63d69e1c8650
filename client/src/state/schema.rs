//! Declarative validation rules for the composer form.
//!
//! DESIGN
//! ======
//! `POST_SCHEMA` is the single source of truth: one `FieldRule` per
//! constraint, each a predicate plus the message shown under the field.
//! `check` walks the table and keeps the first failing rule per field, so a
//! field reports at most one error no matter how many rules it has.
//! `validate` adds the promotion to `ValidPost` on success.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;

use super::draft::{Field, PostDraft, ValidPost};

/// Minimum content length, counted in characters.
pub const MIN_CONTENT_CHARS: usize = 10;

// =============================================================================
// RULES
// =============================================================================

/// One constraint on one field.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: Field,
    pub message: &'static str,
    /// Returns `true` when the draft satisfies the rule.
    pub check: fn(&PostDraft) -> bool,
}

/// Every rule the form enforces, in field order. `image` is optional and has
/// no rules.
pub static POST_SCHEMA: &[FieldRule] = &[
    FieldRule { field: Field::Title, message: "Title must not be empty", check: |d| !d.title.is_empty() },
    FieldRule { field: Field::Topic, message: "Please choose a topic", check: |d| d.topic.is_some() },
    FieldRule { field: Field::Tone, message: "Please choose a tone", check: |d| d.tone.is_some() },
    FieldRule {
        field: Field::Content,
        message: "Content must be at least 10 characters",
        check: |d| d.content.chars().count() >= MIN_CONTENT_CHARS,
    },
    FieldRule { field: Field::Fanpage, message: "Please choose a fanpage", check: |d| d.fanpage.is_some() },
    FieldRule { field: Field::PostDate, message: "Please choose a publish date", check: |d| d.post_date.is_some() },
];

// =============================================================================
// ERRORS
// =============================================================================

/// A field value that failed its rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}: {message}", .field.name())]
pub struct FieldValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Every field that failed, at most one entry per field, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation: {}", .errors.len(), field_names(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldValidationError>,
}

impl ValidationErrors {
    fn from_map(map: BTreeMap<Field, &'static str>) -> Self {
        Self { errors: map.into_iter().map(|(field, message)| FieldValidationError { field, message }).collect() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error attached to `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.iter()
    }

    /// Failed fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

fn field_names(errors: &[FieldValidationError]) -> String {
    errors.iter().map(|e| e.field.name()).collect::<Vec<_>>().join(", ")
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Run every rule and return the first failure message per field.
#[must_use]
pub fn check(draft: &PostDraft) -> BTreeMap<Field, &'static str> {
    let mut failed = BTreeMap::new();
    for rule in POST_SCHEMA {
        if !(rule.check)(draft) {
            failed.entry(rule.field).or_insert(rule.message);
        }
    }
    failed
}

/// Message of the first rule declared for `field`.
#[must_use]
pub fn message_for(field: Field) -> Option<&'static str> {
    POST_SCHEMA.iter().find(|r| r.field == field).map(|r| r.message)
}

/// Validate a draft and promote it to a `ValidPost`.
///
/// # Errors
///
/// Returns one `FieldValidationError` per field whose rules fail.
pub fn validate(draft: &PostDraft) -> Result<ValidPost, ValidationErrors> {
    let failed = check(draft);
    if !failed.is_empty() {
        return Err(ValidationErrors::from_map(failed));
    }

    Ok(ValidPost {
        title: draft.title.clone(),
        topic: required(draft.topic, Field::Topic)?,
        tone: required(draft.tone, Field::Tone)?,
        content: draft.content.clone(),
        image: Some(draft.image.trim()).filter(|s| !s.is_empty()).map(str::to_owned),
        fanpage: required(draft.fanpage, Field::Fanpage)?,
        post_date: required(draft.post_date, Field::PostDate)?,
    })
}

fn required<T>(value: Option<T>, field: Field) -> Result<T, ValidationErrors> {
    value.ok_or_else(|| {
        let message = message_for(field).unwrap_or("This field is required");
        ValidationErrors { errors: vec![FieldValidationError { field, message }] }
    })
}
