//! Deck manager for per-category draw-without-replacement.
//!
//! Each category gets a `CategoryDeck` the first time it is drawn from:
//! - `remaining`: drawable IDs, front is drawn first
//! - `used`: IDs already drawn this epoch
//!
//! When `remaining` can't satisfy a draw but the category is big enough,
//! both halves are merged and reshuffled into a new epoch.

use im::{HashMap as ImHashMap, Vector};
use serde::{Deserialize, Serialize};

use crate::cards::{CardPool, CategoryId, Question, QuestionId};
use crate::core::{DeckError, GameRng};

/// Draw state for one category.
///
/// `remaining` and `used` are disjoint and together always hold every
/// question ID of the category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDeck {
    remaining: Vector<QuestionId>,
    used: Vector<QuestionId>,
}

impl CategoryDeck {
    /// Start a fresh deck in the given (already shuffled) order.
    #[must_use]
    pub fn new(order: Vec<QuestionId>) -> Self {
        Self {
            remaining: order.into_iter().collect(),
            used: Vector::new(),
        }
    }

    /// IDs still drawable this epoch, in draw order.
    #[must_use]
    pub fn remaining(&self) -> &Vector<QuestionId> {
        &self.remaining
    }

    /// IDs drawn this epoch, in draw order.
    #[must_use]
    pub fn used(&self) -> &Vector<QuestionId> {
        &self.used
    }

    /// Size of the category.
    #[must_use]
    pub fn total(&self) -> usize {
        self.remaining.len() + self.used.len()
    }

    /// Merge both halves and shuffle them into a new `remaining`.
    fn reshuffle(&mut self, rng: &mut GameRng) {
        let all = self.remaining.iter().chain(self.used.iter()).cloned();
        self.remaining = rng.shuffled(all).into_iter().collect();
        self.used.clear();
    }

    /// Move the first `count` remaining IDs to `used` and return them.
    fn take(&mut self, count: usize) -> Vector<QuestionId> {
        let rest = self.remaining.split_off(count);
        let drawn = std::mem::replace(&mut self.remaining, rest);
        self.used.append(drawn.clone());
        drawn
    }
}

/// All category decks of a session.
///
/// ## Usage
///
/// ```
/// use deep_talk::cards::{CardPool, CategoryId, Depth, Question};
/// use deep_talk::core::GameRng;
/// use deep_talk::deck::DeckManager;
///
/// let pool = CardPool::new((1..=5).map(|i| {
///     Question::new(format!("fn-{i}").as_str(), "fun", "?", Depth::Light)
/// }))
/// .unwrap();
/// let fun = CategoryId::new("fun");
/// let mut rng = GameRng::new(42);
/// let mut decks = DeckManager::new();
///
/// let hand = decks.draw_unique(&pool, &fun, 3, &mut rng).unwrap();
/// assert_eq!(hand.len(), 3);
/// assert_eq!(decks.get(&fun).unwrap().remaining().len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckManager {
    decks: ImHashMap<CategoryId, CategoryDeck>,
}

impl DeckManager {
    /// Create a manager with no decks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the deck for `category` if it doesn't exist yet.
    ///
    /// The deck holds every question of the category in a uniformly random
    /// order. Calling this again is a no-op.
    pub fn ensure_initialized(&mut self, pool: &CardPool, category: &CategoryId, rng: &mut GameRng) {
        if self.decks.contains_key(category) {
            return;
        }

        let order = rng.shuffled(pool.ids_in_category(category));
        tracing::debug!(
            target: "deep_talk::deck",
            category = %category,
            size = order.len(),
            "initialized category deck"
        );
        self.decks.insert(category.clone(), CategoryDeck::new(order));
    }

    /// Draw `count` distinct questions from a category.
    ///
    /// Reshuffles when `remaining` is too short. Fails without touching the
    /// deck if the whole category has fewer than `count` questions.
    pub fn draw_unique(
        &mut self,
        pool: &CardPool,
        category: &CategoryId,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<Question>, DeckError> {
        self.ensure_initialized(pool, category, rng);
        let deck = self
            .decks
            .entry(category.clone())
            .or_insert_with(CategoryDeck::default);

        let total = deck.total();
        if total < count {
            return Err(DeckError::InsufficientCards {
                category: category.clone(),
                needed: count,
                available: total,
            });
        }

        if deck.remaining.len() < count {
            tracing::debug!(
                target: "deep_talk::deck",
                category = %category,
                size = total,
                "reshuffling category deck"
            );
            deck.reshuffle(rng);
        }

        let drawn = deck.take(count);
        Ok(drawn.iter().filter_map(|id| pool.get(id).cloned()).collect())
    }

    /// Get the deck for a category, if it has been created.
    #[must_use]
    pub fn get(&self, category: &CategoryId) -> Option<&CategoryDeck> {
        self.decks.get(category)
    }

    /// Number of categories with a deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Check if no deck has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Drop every deck.
    pub fn clear(&mut self) {
        self.decks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Depth;
    use std::collections::HashSet;

    fn pool_with(category: &str, n: usize) -> CardPool {
        CardPool::new((0..n).map(|i| {
            Question::new(format!("{category}-{i}").as_str(), category, "?", Depth::Light)
        }))
        .unwrap()
    }

    #[test]
    fn test_lazy_initialization() {
        let pool = pool_with("fun", 10);
        let fun = CategoryId::new("fun");
        let mut rng = GameRng::new(1);
        let mut decks = DeckManager::new();

        assert!(decks.get(&fun).is_none());
        decks.ensure_initialized(&pool, &fun, &mut rng);

        let deck = decks.get(&fun).unwrap();
        assert_eq!(deck.remaining().len(), 10);
        assert!(deck.used().is_empty());
    }

    #[test]
    fn test_ensure_initialized_is_idempotent() {
        let pool = pool_with("fun", 10);
        let fun = CategoryId::new("fun");
        let mut rng = GameRng::new(1);
        let mut decks = DeckManager::new();

        decks.draw_unique(&pool, &fun, 4, &mut rng).unwrap();
        let before = decks.get(&fun).unwrap().clone();

        decks.ensure_initialized(&pool, &fun, &mut rng);
        assert_eq!(decks.get(&fun).unwrap(), &before);
    }

    #[test]
    fn test_draw_moves_front_to_used() {
        let pool = pool_with("fun", 6);
        let fun = CategoryId::new("fun");
        let mut rng = GameRng::new(3);
        let mut decks = DeckManager::new();

        decks.ensure_initialized(&pool, &fun, &mut rng);
        let expected: Vec<_> = decks.get(&fun).unwrap().remaining().iter().take(2).cloned().collect();

        let drawn: Vec<_> = decks
            .draw_unique(&pool, &fun, 2, &mut rng)
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();

        assert_eq!(drawn, expected);
        let deck = decks.get(&fun).unwrap();
        assert_eq!(deck.used().iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(deck.remaining().len(), 4);
    }

    #[test]
    fn test_reshuffle_when_remaining_short() {
        let pool = pool_with("fun", 5);
        let fun = CategoryId::new("fun");
        let mut rng = GameRng::new(9);
        let mut decks = DeckManager::new();

        decks.draw_unique(&pool, &fun, 4, &mut rng).unwrap();
        // Only 1 left; drawing 3 forces a new epoch.
        let drawn = decks.draw_unique(&pool, &fun, 3, &mut rng).unwrap();

        assert_eq!(drawn.len(), 3);
        let deck = decks.get(&fun).unwrap();
        assert_eq!(deck.used().len(), 3);
        assert_eq!(deck.remaining().len(), 2);
        assert_eq!(deck.total(), 5);
    }

    #[test]
    fn test_insufficient_cards() {
        let pool = pool_with("tiny", 1);
        let tiny = CategoryId::new("tiny");
        let mut rng = GameRng::new(1);
        let mut decks = DeckManager::new();

        let err = decks.draw_unique(&pool, &tiny, 3, &mut rng).unwrap_err();
        assert_eq!(
            err,
            DeckError::InsufficientCards {
                category: tiny.clone(),
                needed: 3,
                available: 1,
            }
        );

        // Deck exists but nothing moved.
        let deck = decks.get(&tiny).unwrap();
        assert_eq!(deck.remaining().len(), 1);
        assert!(deck.used().is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty_deck() {
        let pool = pool_with("fun", 3);
        let ghost = CategoryId::new("ghost");
        let mut rng = GameRng::new(1);
        let mut decks = DeckManager::new();

        assert!(decks.draw_unique(&pool, &ghost, 1, &mut rng).is_err());
        assert_eq!(decks.get(&ghost).unwrap().total(), 0);
    }

    #[test]
    fn test_draw_zero() {
        let pool = pool_with("fun", 3);
        let fun = CategoryId::new("fun");
        let mut rng = GameRng::new(1);
        let mut decks = DeckManager::new();

        assert!(decks.draw_unique(&pool, &fun, 0, &mut rng).unwrap().is_empty());
        assert_eq!(decks.get(&fun).unwrap().remaining().len(), 3);
    }

    #[test]
    fn test_full_epoch_covers_category() {
        let pool = pool_with("fun", 12);
        let fun = CategoryId::new("fun");
        let mut rng = GameRng::new(5);
        let mut decks = DeckManager::new();

        let mut seen = HashSet::new();
        for _ in 0..4 {
            for q in decks.draw_unique(&pool, &fun, 3, &mut rng).unwrap() {
                assert!(seen.insert(q.id), "repeat inside one epoch");
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_clear() {
        let pool = pool_with("fun", 3);
        let mut rng = GameRng::new(1);
        let mut decks = DeckManager::new();

        decks.draw_unique(&pool, &CategoryId::new("fun"), 1, &mut rng).unwrap();
        assert_eq!(decks.len(), 1);

        decks.clear();
        assert!(decks.is_empty());
    }
}
