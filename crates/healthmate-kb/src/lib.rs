//! healthmate-kb — Knowledge base store.
//!
//! Holds the symptom groups, their candidate causes and the red-flag rules.
//! Data is parsed and validated once at startup into immutable values and
//! shared read-only between requests through [`Knowledge`].

pub mod knowledge;
pub mod loader;
pub mod model;
pub mod schema;

pub use knowledge::Knowledge;
pub use loader::{load_knowledge, load_knowledge_base, load_red_flags, DataFormat};
pub use model::{Cause, KnowledgeBase, RedFlagCondition, RedFlagRule, RedFlagSet, SymptomGroup};
