//! Per-category card supply.
//!
//! The `DeckManager` hands out questions without replacement and
//! reshuffles a category once it runs dry, so no card repeats until the
//! whole category has been seen.

pub mod manager;

pub use manager::{CategoryDeck, DeckManager};
