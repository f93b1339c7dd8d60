//! Solo browsing tests.

use std::collections::HashSet;

use deep_talk::cards::{CardPool, CategoryId, Depth, Question, QuestionId};
use deep_talk::core::GameRng;
use deep_talk::solo::SoloQueue;

fn browser(size: usize, seed: u64) -> SoloQueue {
    let questions = (0..size)
        .map(|i| Question::new(format!("dt-{i}").as_str(), "deep-talk", "?", Depth::Deep))
        .chain(std::iter::once(Question::new("fn-0", "fun", "?", Depth::Light)));
    SoloQueue::with_rng(CardPool::new(questions).unwrap(), GameRng::new(seed))
}

/// Test that one pass through the queue shows every card once.
#[test]
fn test_first_pass_covers_category() {
    let mut solo = browser(10, 1);
    assert!(solo.select_category(&CategoryId::new("deep-talk")));

    for _ in 0..9 {
        solo.next_question().unwrap();
    }

    let shown: HashSet<_> = solo.history().iter().map(|q| q.id.clone()).collect();
    assert_eq!(shown.len(), 10);
    assert_eq!(solo.queued(), 0);
    assert!(solo.history().iter().all(|q| q.category_id.as_str() == "deep-talk"));
}

/// Test that a reshuffle never repeats the card on screen.
#[test]
fn test_no_immediate_repeat_across_reshuffle() {
    for seed in 0..30 {
        let mut solo = browser(3, seed);
        solo.select_category(&CategoryId::new("deep-talk"));

        let mut previous = solo.current().unwrap().id.clone();
        for _ in 0..12 {
            let next = solo.next_question().unwrap().id.clone();
            assert_ne!(next, previous);
            previous = next;
        }
    }
}

/// Test that reset clears the game but keeps favorites.
#[test]
fn test_reset_keeps_favorites() {
    let mut solo = browser(4, 2);
    solo.select_category(&CategoryId::new("deep-talk"));
    solo.toggle_favorite(&QuestionId::new("dt-2"));
    solo.next_question();

    solo.reset();

    assert!(solo.category().is_none());
    assert!(solo.current().is_none());
    assert!(solo.history().is_empty());
    assert_eq!(solo.queued(), 0);
    assert!(solo.is_favorite(&QuestionId::new("dt-2")));
}

/// Test switching categories starts a fresh history.
#[test]
fn test_switch_category() {
    let mut solo = browser(4, 3);
    solo.select_category(&CategoryId::new("deep-talk"));
    solo.next_question();

    assert!(solo.select_category(&CategoryId::new("fun")));
    assert_eq!(solo.current().unwrap().id.as_str(), "fn-0");
    assert_eq!(solo.history().len(), 1);
    assert_eq!(solo.queued(), 0);
}
