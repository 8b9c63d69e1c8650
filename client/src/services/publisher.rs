//! Publishing the accepted post.
//!
//! TRADE-OFFS
//! ==========
//! Publishing is a synchronous, fire-and-forget call. There is no result to
//! surface, no retry and no queue; a publisher that talks to a real platform
//! owns its own failure handling.

#[cfg(test)]
#[path = "publisher_test.rs"]
mod publisher_test;

use crate::state::draft::{Choice, ValidPost};
use crate::util::date;

/// Everything a publisher needs: the validated post and the copy to post.
#[derive(Clone, Copy, Debug)]
pub struct PublishRequest<'a> {
    pub post: &'a ValidPost,
    pub content: &'a str,
}

impl PublishRequest<'_> {
    /// One-line description used in logs.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "\"{}\" to {} on {} ({} chars)",
            self.post.title,
            self.post.fanpage.label(),
            date::display(self.post.post_date),
            self.content.chars().count()
        )
    }
}

/// Receives an accepted post. Called once per accept.
pub trait Publisher: Send + Sync {
    fn publish(&self, request: &PublishRequest<'_>);
}

/// Only logs the request, with the post as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogPublisher;

impl Publisher for LogPublisher {
    fn publish(&self, request: &PublishRequest<'_>) {
        leptos::logging::log!("publish requested: {}", request.summary());
        match serde_json::to_string(request.post) {
            Ok(json) => leptos::logging::log!("publish payload: {json}"),
            Err(e) => leptos::logging::warn!("publish payload not serializable: {e}"),
        }
    }
}
