//! Card system: questions, categories, and the card pool.
//!
//! ## Key Types
//!
//! - `QuestionId` / `CategoryId`: string identifiers
//! - `Depth`: light, moderate or deep (1-3 on the wire)
//! - `Question`: immutable card data with optional follow-ups
//! - `Category`: reference data for a topic
//! - `CardPool`: ordered question collection, static or generated

pub mod category;
pub mod pool;
pub mod question;

pub use category::Category;
pub use pool::CardPool;
pub use question::{CategoryId, Depth, Question, QuestionId};
