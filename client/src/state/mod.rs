//! Composer state modules.
//!
//! DESIGN
//! ======
//! `draft` holds the form data, `schema` the rules over it, and `composer`
//! the step machine that ties them together. None of them touch Leptos
//! signals.

pub mod composer;
pub mod draft;
pub mod schema;
