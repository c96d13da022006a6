//! Boundary to the external chat assistant.
//!
//! The assistant is a remote collaborator: this crate defines the message
//! types, the seam the embedder implements, and the failure classification,
//! and nothing else. Prompt construction for the remote model and the
//! network call itself live outside the crate. At most one request is
//! outstanding at a time (the caller disables submission while one is in
//! flight) and there is no cancellation; a failed request resolves to a
//! locally synthesized error message.

use serde::{Deserialize, Serialize};

use crate::error::ChatError;
use crate::model::{OptimalDimensions, Shape, Volume};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in the message log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// The seam the embedder implements against the remote assistant.
///
/// Responses are appended to the log in completion order, which matches
/// request order because the caller allows only one request in flight.
pub trait ChatBackend {
    /// Sends the user's question with the conversation history and the
    /// current calculation context, returning the assistant's reply text
    /// (expected to contain inline or block math markup).
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] classifying the failure; callers display
    /// [`ChatError::user_message`] instead of propagating it.
    fn send(
        &mut self,
        history: &[ChatMessage],
        context: &str,
        question: &str,
    ) -> Result<String, ChatError>;
}

/// Classifies a raw error message from the remote assistant by its known
/// substrings: HTTP 429 or quota text means rate limiting, credential text
/// means a bad API key, anything else is a generic failure.
#[must_use]
pub fn classify_error(message: &str) -> ChatError {
    if message.contains("429") || message.contains("quota") {
        ChatError::RateLimited
    } else if message.contains("API key") {
        ChatError::InvalidApiKey
    } else {
        ChatError::Failed(message.to_owned())
    }
}

/// The calculation state the assistant was last told about, used to notice
/// when the user's inputs have changed behind an open conversation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextSnapshot {
    shape: Shape,
    volume: Volume,
    surface_area: f64,
}

impl ContextSnapshot {
    /// Captures the current state. An empty result is recorded with zero
    /// area, matching the empty input state.
    #[must_use]
    pub fn capture(shape: Shape, volume: Volume, results: Option<&OptimalDimensions>) -> Self {
        Self {
            shape,
            volume,
            surface_area: results.map_or(0.0, OptimalDimensions::surface_area),
        }
    }

    /// Returns true when the inputs have materially changed since `prev`.
    /// Area changes below 0.01 cm² are treated as noise.
    #[must_use]
    pub fn changed_since(&self, prev: &Self) -> bool {
        self.shape != prev.shape
            || self.volume != prev.volume
            || (self.surface_area - prev.surface_area).abs() > 0.01
    }

    /// Builds the assistant-authored notice appended to the log when the
    /// data changed under an open conversation. Returns `None` in the empty
    /// input state.
    #[must_use]
    pub fn update_notice(&self, results: &OptimalDimensions) -> Option<String> {
        let volume = self.volume.value()?;

        let (shape_name, summary) = match *results {
            OptimalDimensions::Cylinder { radius, height, .. } => (
                "Cylinder (can)",
                format!("Radius: {radius:.2} cm, Height: {height:.2} cm"),
            ),
            OptimalDimensions::SquareBasedBox { side, height, .. } => (
                "Square-based box",
                format!("Base side: {side:.2} cm, Height: {height:.2} cm"),
            ),
        };

        Some(format!(
            "**The data has changed.**\n\n\
             **New parameters:**\n\
             - Shape: {shape_name}\n\
             - Volume: {volume} cm³\n\
             - {summary}\n\
             - Surface area: {:.2} cm²\n\n\
             _You can ask me about these new results._",
            results.surface_area()
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::optimize::optimize;

    #[test]
    fn classifies_rate_limiting() {
        assert!(matches!(
            classify_error("got status 429 from upstream"),
            ChatError::RateLimited
        ));
        assert!(matches!(
            classify_error("quota exceeded for model"),
            ChatError::RateLimited
        ));
    }

    #[test]
    fn classifies_bad_credentials() {
        assert!(matches!(
            classify_error("API key not valid"),
            ChatError::InvalidApiKey
        ));
    }

    #[test]
    fn everything_else_is_generic() {
        let err = classify_error("connection reset by peer");
        assert!(matches!(err, ChatError::Failed(_)));
        assert!(err.user_message().starts_with("Sorry"));
    }

    #[test]
    fn each_class_has_a_distinct_user_message() {
        let messages = [
            ChatError::RateLimited.user_message(),
            ChatError::InvalidApiKey.user_message(),
            ChatError::Failed(String::new()).user_message(),
        ];
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_ne!(messages[0], messages[2]);
    }

    #[test]
    fn snapshot_diffing_ignores_area_noise() {
        let volume = Volume::new(330.0);
        let dims = optimize(Shape::Cylinder, volume).unwrap();
        let a = ContextSnapshot::capture(Shape::Cylinder, volume, Some(&dims));
        let mut b = a;
        b.surface_area += 0.005;
        assert!(!b.changed_since(&a));
        b.surface_area += 1.0;
        assert!(b.changed_since(&a));
    }

    #[test]
    fn snapshot_notices_shape_and_volume_changes() {
        let volume = Volume::new(330.0);
        let dims = optimize(Shape::Cylinder, volume).unwrap();
        let a = ContextSnapshot::capture(Shape::Cylinder, volume, Some(&dims));

        let other = optimize(Shape::SquareBasedBox, volume).unwrap();
        let b = ContextSnapshot::capture(Shape::SquareBasedBox, volume, Some(&other));
        assert!(b.changed_since(&a));
    }

    #[test]
    fn update_notice_summarizes_the_new_optimum() {
        let volume = Volume::new(1000.0);
        let dims = optimize(Shape::SquareBasedBox, volume).unwrap();
        let snap = ContextSnapshot::capture(Shape::SquareBasedBox, volume, Some(&dims));
        let notice = snap.update_notice(&dims).unwrap();
        assert!(notice.contains("Square-based box"));
        assert!(notice.contains("1000 cm³"));
        assert!(notice.contains("600.00 cm²"));
    }

    #[test]
    fn no_notice_for_empty_input() {
        let dims = optimize(Shape::Cylinder, Volume::new(330.0)).unwrap();
        let snap = ContextSnapshot::capture(Shape::Cylinder, Volume::empty(), None);
        assert!(snap.update_notice(&dims).is_none());
    }
}
