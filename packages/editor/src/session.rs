//! # Edit Session
//!
//! The single controller that owns the page. Replaces ambient global
//! state with an explicit lifecycle:
//!
//! ```text
//! load(storage) → apply(mutation)* → save()
//!                      ↓
//!               persist after each
//! ```
//!
//! A rejected mutation is logged and returned; the page is unchanged.
//! A failed write is logged and the session continues unpersisted, with
//! the in-memory page as the source of truth.

use crate::mutations::{MutationEffect, MutationResult};
use crate::persistence::{load_page, save_page};
use crate::{EditorError, Mutation};
use pagex_common::{MemoryStorage, Storage};
use pagex_model::{IdGenerator, Page};
use tracing::{debug, error, warn};

pub struct EditSession<S: Storage = MemoryStorage> {
    page: Page,
    storage: S,
    ids: IdGenerator,

    /// Increments on each successful mutation
    pub version: u64,

    /// Set when the latest state could not be written
    dirty: bool,
}

impl<S: Storage> EditSession<S> {
    /// Restore the page from storage (defaults for anything missing)
    pub fn load(storage: S) -> Self {
        let page = load_page(&storage);
        debug!(blocks = page.blocks.len(), "session loaded");
        Self::with_page(page, storage)
    }

    /// Start from an explicit page without reading storage
    pub fn with_page(page: Page, storage: S) -> Self {
        Self {
            page,
            storage,
            ids: IdGenerator::new(),
            version: 0,
            dirty: false,
        }
    }

    /// Use a custom id generator (deterministic ids in tests)
    pub fn with_id_generator(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    /// Apply a mutation and persist the result
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let effect = match mutation.apply(&mut self.page, &mut self.ids) {
            Ok(effect) => effect,
            Err(e) => {
                warn!(mutation = mutation.name(), error = %e, "mutation rejected");
                return Err(e.into());
            }
        };

        self.version += 1;
        debug!(
            mutation = mutation.name(),
            version = self.version,
            changed = effect != MutationEffect::Unchanged,
            "mutation applied"
        );

        let persisted = self.persist();

        Ok(MutationResult {
            version: self.version,
            effect,
            persisted,
        })
    }

    /// Write the page to storage, reporting failure to the caller
    pub fn save(&mut self) -> Result<(), EditorError> {
        save_page(&mut self.storage, &self.page)?;
        self.dirty = false;
        Ok(())
    }

    fn persist(&mut self) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "failed to persist page, continuing in memory");
                self.dirty = true;
                false
            }
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// True if the last write failed
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{BLOCKS_KEY, SETTINGS_KEY};
    use pagex_model::BlockType;

    #[test]
    fn test_session_creation() {
        let session = EditSession::load(MemoryStorage::new());

        assert_eq!(session.version, 0);
        assert_eq!(session.page(), &Page::default());
        assert!(!session.is_dirty());
        // Loading alone does not write
        assert!(session.storage().is_empty());
    }

    #[test]
    fn test_apply_persists_immediately() {
        let mut session = EditSession::load(MemoryStorage::new());

        let result = session
            .apply(Mutation::AddBlock { block_type: BlockType::Contact })
            .unwrap();

        assert_eq!(result.version, 1);
        assert!(result.persisted);
        let stored = session.storage().get_item(BLOCKS_KEY).unwrap().unwrap();
        assert!(stored.contains("\"contact\""));
        assert!(session.storage().get_item(SETTINGS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_rejected_mutation_keeps_version() {
        let mut session = EditSession::load(MemoryStorage::new());

        let mutation = Mutation::UpdateSettings {
            patch: crate::SettingsPatch {
                primary_color: Some("#12".to_string()),
                ..Default::default()
            },
        };

        assert!(session.apply(mutation).is_err());
        assert_eq!(session.version, 0);
        assert!(session.storage().is_empty());
    }
}
