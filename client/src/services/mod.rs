//! Collaborators the composer calls out to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content generation and publishing sit behind traits so a real service can
//! replace the built-in stand-ins without touching `state::composer`. The
//! active pair is provided to the component tree as `ComposerServices`.

pub mod generator;
pub mod publisher;

use std::sync::Arc;

use generator::{ContentGenerator, PlaceholderGenerator};
use publisher::{LogPublisher, Publisher};

/// Generator + publisher pair shared through Leptos context.
#[derive(Clone)]
pub struct ComposerServices {
    pub generator: Arc<dyn ContentGenerator>,
    pub publisher: Arc<dyn Publisher>,
}

impl ComposerServices {
    #[must_use]
    pub fn new(generator: Arc<dyn ContentGenerator>, publisher: Arc<dyn Publisher>) -> Self {
        Self { generator, publisher }
    }
}

impl Default for ComposerServices {
    fn default() -> Self {
        Self::new(Arc::new(PlaceholderGenerator), Arc::new(LogPublisher))
    }
}
