//! Question cards - immutable prompt data.
//!
//! A `Question` is what a player reads aloud. The wire shape matches what
//! static tables and the text generator produce:
//!
//! ```json
//! { "id": "ib-1", "categoryId": "ice-breaker", "text": "...", "depth": 1,
//!   "followUps": ["..."] }
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PoolError;

/// Unique identifier for a question.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Topic category identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// How personal a question gets. Encoded as 1, 2 or 3 on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Depth {
    Light = 1,
    Moderate = 2,
    Deep = 3,
}

impl TryFrom<u8> for Depth {
    type Error = PoolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Depth::Light),
            2 => Ok(Depth::Moderate),
            3 => Ok(Depth::Deep),
            other => Err(PoolError::InvalidDepth(other)),
        }
    }
}

impl From<Depth> for u8 {
    fn from(depth: Depth) -> Self {
        depth as u8
    }
}

/// A question card.
///
/// ## Example
///
/// ```
/// use deep_talk::cards::{Depth, Question};
///
/// let q = Question::new("fn-1", "fun", "If your life were a soap opera, what's the title?", Depth::Light)
///     .with_follow_up("What's the twist?");
///
/// assert_eq!(q.follow_ups.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,

    pub category_id: CategoryId,

    /// Text shown on the card.
    pub text: String,

    pub depth: Depth,

    /// Optional prompts to dig deeper. Usually one or two.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub follow_ups: SmallVec<[String; 2]>,
}

impl Question {
    /// Create a question with no follow-ups.
    #[must_use]
    pub fn new(
        id: impl Into<QuestionId>,
        category_id: impl Into<CategoryId>,
        text: impl Into<String>,
        depth: Depth,
    ) -> Self {
        Self {
            id: id.into(),
            category_id: category_id.into(),
            text: text.into(),
            depth,
            follow_ups: SmallVec::new(),
        }
    }

    /// Add a follow-up prompt (builder pattern).
    #[must_use]
    pub fn with_follow_up(mut self, prompt: impl Into<String>) -> Self {
        self.follow_ups.push(prompt.into());
        self
    }

    /// Check if this question belongs to a category.
    #[must_use]
    pub fn in_category(&self, category: &CategoryId) -> bool {
        &self.category_id == category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_display() {
        assert_eq!(QuestionId::new("ib-1").to_string(), "ib-1");
        assert_eq!(CategoryId::from("fun").as_str(), "fun");
    }

    #[test]
    fn test_depth_conversion() {
        assert_eq!(Depth::try_from(1).unwrap(), Depth::Light);
        assert_eq!(Depth::try_from(3).unwrap(), Depth::Deep);
        assert!(matches!(Depth::try_from(4), Err(PoolError::InvalidDepth(4))));
        assert_eq!(u8::from(Depth::Moderate), 2);
        assert!(Depth::Light < Depth::Deep);
    }

    #[test]
    fn test_question_wire_format() {
        let json = r#"{
            "id": "ib-5",
            "categoryId": "ice-breaker",
            "text": "Which song do you secretly know by heart?",
            "depth": 1,
            "followUps": ["Sing the chorus!"]
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, QuestionId::new("ib-5"));
        assert_eq!(q.category_id, CategoryId::new("ice-breaker"));
        assert_eq!(q.depth, Depth::Light);
        assert_eq!(q.follow_ups.as_slice(), ["Sing the chorus!".to_string()]);
    }

    #[test]
    fn test_question_without_follow_ups() {
        let q: Question =
            serde_json::from_str(r#"{"id":"x","categoryId":"fun","text":"?","depth":2}"#).unwrap();
        assert!(q.follow_ups.is_empty());

        let json = serde_json::to_string(&q).unwrap();
        assert!(!json.contains("followUps"));
    }

    #[test]
    fn test_bad_depth_rejected() {
        let result: Result<Question, _> =
            serde_json::from_str(r#"{"id":"x","categoryId":"fun","text":"?","depth":7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_in_category() {
        let q = Question::new("fn-1", "fun", "?", Depth::Light);
        assert!(q.in_category(&CategoryId::new("fun")));
        assert!(!q.in_category(&CategoryId::new("deep-talk")));
    }
}
