//! Solo browsing: one card at a time from a single category.
//!
//! Selecting a category shuffles it into a queue and shows the first card.
//! `next_question` walks the queue; once it runs out the category is reshuffled
//! without the card on screen, so the same card never shows twice in a row.

use std::collections::VecDeque;

use crate::cards::{CardPool, CategoryId, Question, QuestionId};
use crate::core::GameRng;

/// Single-device question browser with history and favorites.
#[derive(Clone, Debug)]
pub struct SoloQueue {
    pool: CardPool,
    rng: GameRng,
    category: Option<CategoryId>,
    current: Option<Question>,
    queue: VecDeque<Question>,
    history: Vec<Question>,
    favorites: Vec<QuestionId>,
    active_follow_up: Option<String>,
}

impl SoloQueue {
    /// Create a browser over a pool, seeded from OS entropy.
    #[must_use]
    pub fn new(pool: CardPool) -> Self {
        Self::with_rng(pool, GameRng::from_entropy())
    }

    /// Create a browser with an injected random source.
    #[must_use]
    pub fn with_rng(pool: CardPool, rng: GameRng) -> Self {
        Self {
            pool,
            rng,
            category: None,
            current: None,
            queue: VecDeque::new(),
            history: Vec::new(),
            favorites: Vec::new(),
            active_follow_up: None,
        }
    }

    /// Switch to a category and show its first (random) card.
    ///
    /// Returns `false` and changes nothing if the category has no questions.
    pub fn select_category(&mut self, category: &CategoryId) -> bool {
        let mut shuffled: VecDeque<Question> =
            self.rng.shuffled(self.pool.in_category(category).cloned()).into();
        let Some(first) = shuffled.pop_front() else {
            return false;
        };

        self.category = Some(category.clone());
        self.history = vec![first.clone()];
        self.current = Some(first);
        self.queue = shuffled;
        self.active_follow_up = None;
        true
    }

    /// Advance to the next card.
    ///
    /// Returns the new current card, or `None` if no category is selected.
    pub fn next_question(&mut self) -> Option<&Question> {
        self.active_follow_up = None;
        let category = self.category.clone()?;

        if self.queue.is_empty() {
            let current_id = self.current.as_ref().map(|q| q.id.clone());
            let candidates = self
                .pool
                .in_category(&category)
                .filter(|q| Some(&q.id) != current_id.as_ref())
                .cloned();
            self.queue = self.rng.shuffled(candidates).into();
        }

        // A one-card category has nothing else to show; keep the current card.
        if let Some(next) = self.queue.pop_front() {
            self.history.push(next.clone());
            self.current = Some(next);
        }
        self.current.as_ref()
    }

    /// Leave the category. Favorites survive.
    pub fn reset(&mut self) {
        self.category = None;
        self.current = None;
        self.queue.clear();
        self.history.clear();
        self.active_follow_up = None;
    }

    /// Add or remove a favorite. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: &QuestionId) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id.clone());
            true
        }
    }

    /// Show a follow-up prompt.
    pub fn show_follow_up(&mut self, text: impl Into<String>) {
        self.active_follow_up = Some(text.into());
    }

    /// Hide the follow-up prompt.
    pub fn close_follow_up(&mut self) {
        self.active_follow_up = None;
    }

    // === Accessors ===

    #[must_use]
    pub fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Every card shown since the category was selected.
    #[must_use]
    pub fn history(&self) -> &[Question] {
        &self.history
    }

    #[must_use]
    pub fn favorites(&self) -> &[QuestionId] {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: &QuestionId) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn active_follow_up(&self) -> Option<&str> {
        self.active_follow_up.as_deref()
    }
}
