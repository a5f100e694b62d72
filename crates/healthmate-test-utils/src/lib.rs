//! Fixture builders for engine tests.

pub mod fixtures;

pub use fixtures::{chest_pain_knowledge, KnowledgeFixture, CHEST_PAIN_RED_FLAG};
