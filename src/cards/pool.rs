//! Card pool: the read-only question collection a session draws from.
//!
//! A pool keeps questions in the order they were supplied and indexes them
//! by ID. It can come from a static table or from a generated batch.

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::question::{CategoryId, Question, QuestionId};
use crate::core::PoolError;

/// Ordered, read-only collection of questions.
///
/// ## Example
///
/// ```
/// use deep_talk::cards::{CardPool, CategoryId, Depth, Question};
///
/// let pool = CardPool::new(vec![
///     Question::new("fn-1", "fun", "Pick a superpower", Depth::Light),
///     Question::new("dt-1", "deep-talk", "What keeps you up at night?", Depth::Deep),
/// ])
/// .unwrap();
///
/// assert_eq!(pool.category_size(&CategoryId::new("fun")), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    questions: Vec<Question>,
    index: FxHashMap<QuestionId, usize>,
}

/// Shape of a generator response body.
#[derive(Deserialize)]
struct GeneratedBatch {
    questions: Vec<Question>,
}

impl CardPool {
    /// Build a pool. Question IDs must be unique.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Result<Self, PoolError> {
        let mut pool = Self::default();
        for question in questions {
            if pool.index.contains_key(&question.id) {
                return Err(PoolError::DuplicateQuestion(question.id));
            }
            pool.index.insert(question.id.clone(), pool.questions.len());
            pool.questions.push(question);
        }
        Ok(pool)
    }

    /// Build a pool from raw generator output.
    ///
    /// The response may wrap its JSON in prose or a markdown fence; the span
    /// from the first `{` to the last `}` is parsed as
    /// `{ "questions": [...] }`. Every question is re-tagged with `category`
    /// so the batch behaves as a single synthetic category.
    pub fn from_generated(response: &str, category: impl Into<CategoryId>) -> Result<Self, PoolError> {
        let category = category.into();
        let body = extract_json_object(response).ok_or(PoolError::NoJsonObject)?;
        let batch: GeneratedBatch = serde_json::from_str(body)?;

        Self::new(batch.questions.into_iter().map(|mut q| {
            q.category_id = category.clone();
            q
        }))
    }

    /// Get a question by ID.
    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    /// Check if a question ID is in the pool.
    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.index.contains_key(id)
    }

    /// Total number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over all questions in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Questions in a category, in pool order.
    pub fn in_category<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions.iter().filter(move |q| q.in_category(category))
    }

    /// IDs of the questions in a category, in pool order.
    #[must_use]
    pub fn ids_in_category(&self, category: &CategoryId) -> Vec<QuestionId> {
        self.in_category(category).map(|q| q.id.clone()).collect()
    }

    /// Number of questions in a category.
    #[must_use]
    pub fn category_size(&self, category: &CategoryId) -> usize {
        self.in_category(category).count()
    }

    /// Distinct category IDs in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryId> {
        let mut seen: Vec<CategoryId> = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category_id) {
                seen.push(q.category_id.clone());
            }
        }
        seen
    }
}

/// Outermost `{ ... }` span of a text, if any.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Depth;

    fn sample() -> CardPool {
        CardPool::new(vec![
            Question::new("ib-1", "ice-breaker", "a", Depth::Light),
            Question::new("fn-1", "fun", "b", Depth::Light),
            Question::new("ib-2", "ice-breaker", "c", Depth::Moderate),
            Question::new("wc-1", "wildcard", "d", Depth::Deep),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let pool = sample();

        assert_eq!(pool.len(), 4);
        assert_eq!(pool.get(&QuestionId::new("fn-1")).unwrap().text, "b");
        assert!(pool.get(&QuestionId::new("nope")).is_none());
        assert!(pool.contains(&QuestionId::new("wc-1")));
    }

    #[test]
    fn test_category_filtering_keeps_order() {
        let pool = sample();
        let ids = pool.ids_in_category(&CategoryId::new("ice-breaker"));

        assert_eq!(ids, vec![QuestionId::new("ib-1"), QuestionId::new("ib-2")]);
        assert_eq!(pool.category_size(&CategoryId::new("missing")), 0);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let cats: Vec<_> = sample().categories().into_iter().map(|c| c.0).collect();
        assert_eq!(cats, vec!["ice-breaker", "fun", "wildcard"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CardPool::new(vec![
            Question::new("x", "fun", "a", Depth::Light),
            Question::new("x", "fun", "b", Depth::Light),
        ])
        .unwrap_err();

        assert!(matches!(err, PoolError::DuplicateQuestion(id) if id.as_str() == "x"));
    }

    #[test]
    fn test_from_generated_wrapped_response() {
        let response = r#"Here you go:
```json
{
  "questions": [
    { "id": "ai-1", "categoryId": "ai-custom", "text": "First?", "depth": 1,
      "followUps": ["Why?"] },
    { "id": "ai-2", "categoryId": "ai-custom", "text": "Second?", "depth": 3 }
  ]
}
```"#;

        let pool = CardPool::from_generated(response, "ai-custom-1700000000000").unwrap();
        let category = CategoryId::new("ai-custom-1700000000000");

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.category_size(&category), 2);
        assert_eq!(pool.get(&QuestionId::new("ai-2")).unwrap().depth, Depth::Deep);
    }

    #[test]
    fn test_from_generated_without_json() {
        let err = CardPool::from_generated("sorry, I can't help with that", "ai").unwrap_err();
        assert!(matches!(err, PoolError::NoJsonObject));
    }

    #[test]
    fn test_from_generated_bad_shape() {
        let err = CardPool::from_generated(r#"{"items": []}"#, "ai").unwrap_err();
        assert!(matches!(err, PoolError::Json(_)));
    }

    #[test]
    fn test_extract_json_object() {
        assert_eq!(extract_json_object("x {\"a\": {}} y"), Some("{\"a\": {}}"));
        assert_eq!(extract_json_object("} {"), None);
        assert_eq!(extract_json_object("none"), None);
    }
}
