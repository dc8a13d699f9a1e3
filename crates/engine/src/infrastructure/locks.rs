//! Per-character mutual exclusion.
//!
//! Ledger operations are read-modify-write sequences over several store
//! calls. Two of them interleaving on the same character lose updates or
//! double-count a bonus, so each mutating operation holds its character's
//! guard for the whole sequence. Operations on different characters never
//! contend.
//!
//! Entries exist only while someone holds or waits for them; the last guard
//! to drop removes its character's mutex from the table.

use std::sync::Arc;

use dashmap::DashMap;
use questledger_domain::CharacterId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lazily created async mutex per character id.
#[derive(Default)]
pub struct CharacterLocks {
    locks: DashMap<CharacterId, Arc<Mutex<()>>>,
}

/// Exclusive access to one character, released on drop.
pub struct CharacterGuard<'a> {
    locks: &'a CharacterLocks,
    character_id: CharacterId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl CharacterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `character_id`.
    pub async fn acquire(&self, character_id: CharacterId) -> CharacterGuard<'_> {
        // Clone the Arc out so the map shard is not held across the await
        let lock = self
            .locks
            .entry(character_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        CharacterGuard {
            locks: self,
            character_id,
            guard: Some(lock.lock_owned().await),
        }
    }

    fn release(&self, character_id: CharacterId) {
        // The table's own Arc is the only one left: nobody holds or waits.
        // `remove_if` runs under the shard lock, so no `acquire` can clone
        // the Arc in between.
        self.locks
            .remove_if(&character_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Number of characters currently locked or waited on.
    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.locks.len()
    }
}

impl Drop for CharacterGuard<'_> {
    fn drop(&mut self) {
        // Unlock first so the guard's own Arc no longer counts
        self.guard.take();
        self.locks.release(self.character_id);
    }
}
