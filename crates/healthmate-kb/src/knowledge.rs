//! Shared read-only handle over the loaded data.

use std::sync::Arc;

use crate::model::{KnowledgeBase, RedFlagSet};

/// Knowledge base plus red-flag rules, loaded once and cloned cheaply into
/// every request handler.
#[derive(Debug, Clone)]
pub struct Knowledge {
    kb: Arc<KnowledgeBase>,
    red_flags: Arc<RedFlagSet>,
}

impl Knowledge {
    pub fn new(kb: KnowledgeBase, red_flags: RedFlagSet) -> Self {
        Self {
            kb: Arc::new(kb),
            red_flags: Arc::new(red_flags),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn red_flags(&self) -> &RedFlagSet {
        &self.red_flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_knowledge_is_shareable() {
        assert_send_sync::<Knowledge>();
        let k = Knowledge::new(KnowledgeBase::default(), RedFlagSet::default());
        let k2 = k.clone();
        assert!(std::ptr::eq(k.knowledge_base(), k2.knowledge_base()));
    }
}
