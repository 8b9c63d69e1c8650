//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take signals and callbacks as props
//! and never own composer state. `pages::composer` wires them together.

pub mod choice_select;
pub mod form_field;
pub mod post_preview;
pub mod step_progress;
