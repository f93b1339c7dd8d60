//! Solo play: browse one category a card at a time.

pub mod queue;

pub use queue::SoloQueue;
