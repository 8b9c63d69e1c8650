//! Content generation for the preview step.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use crate::state::draft::ValidPost;

/// Text shown in the preview until a real generator is wired in.
pub const PLACEHOLDER_CONTENT: &str = "AI generated this post from the details you provided...";

/// Turns a validated post into the copy shown in the preview.
///
/// Generation cannot fail: whatever comes back is what the preview shows.
pub trait ContentGenerator: Send + Sync {
    fn generate(&self, post: &ValidPost) -> String;
}

/// Plain functions and closures act as generators.
impl<F> ContentGenerator for F
where
    F: Fn(&ValidPost) -> String + Send + Sync,
{
    fn generate(&self, post: &ValidPost) -> String {
        self(post)
    }
}

/// Returns `PLACEHOLDER_CONTENT` for every post.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderGenerator;

impl ContentGenerator for PlaceholderGenerator {
    fn generate(&self, _post: &ValidPost) -> String {
        PLACEHOLDER_CONTENT.to_owned()
    }
}
