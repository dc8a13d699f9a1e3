//! Character progression and equipment ledger.
//!
//! Every operation follows the same shape: take the character's lock, load
//! the current snapshot and gear, compute the next snapshot with the pure
//! transitions on [`Character`], then persist. Writes happen in a fixed
//! order and are never rolled back; a failure after the first write is
//! reported as [`LedgerError::Diverged`] so the caller knows the character
//! and its gear may no longer agree.

mod armor;
mod loadout;
mod progression;
mod skill;
mod weapon;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use questledger_domain::{Character, CharacterId, DomainError, ProgressionRules};

use crate::infrastructure::locks::CharacterLocks;
use crate::infrastructure::ports::{ArmorRepo, CharacterRepo, RepoError, SkillRepo, WeaponRepo};

pub use loadout::Loadout;

/// Errors surfaced by ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// Stat arithmetic rejected the change; nothing was written.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Store failure before anything was written.
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),

    /// Store failure after an earlier write of the same operation succeeded.
    #[error("Character {character_id} may disagree with its gear: {step} failed: {source}")]
    Diverged {
        character_id: CharacterId,
        step: &'static str,
        #[source]
        source: RepoError,
    },
}

impl LedgerError {
    fn diverged(character_id: CharacterId, step: &'static str, source: RepoError) -> Self {
        tracing::warn!(
            %character_id,
            step,
            error = %source,
            "Write failed after earlier writes succeeded; character and gear may disagree"
        );
        Self::Diverged {
            character_id,
            step,
            source,
        }
    }
}

/// Store ports the ledger reads and writes through.
#[derive(Clone)]
pub struct LedgerRepos {
    pub characters: Arc<dyn CharacterRepo>,
    pub weapons: Arc<dyn WeaponRepo>,
    pub armor: Arc<dyn ArmorRepo>,
    pub skills: Arc<dyn SkillRepo>,
}

/// Stat-accounting over the record store.
///
/// Stateless between calls apart from the lock table; all records live in
/// the store.
pub struct Ledger {
    characters: Arc<dyn CharacterRepo>,
    weapons: Arc<dyn WeaponRepo>,
    armor: Arc<dyn ArmorRepo>,
    skills: Arc<dyn SkillRepo>,
    rules: ProgressionRules,
    locks: CharacterLocks,
}

impl Ledger {
    pub fn new(repos: LedgerRepos, rules: ProgressionRules) -> Result<Self, DomainError> {
        Ok(Self {
            characters: repos.characters,
            weapons: repos.weapons,
            armor: repos.armor,
            skills: repos.skills,
            rules: rules.validate()?,
            locks: CharacterLocks::new(),
        })
    }

    async fn load_character(&self, character_id: CharacterId) -> Result<Character, LedgerError> {
        self.characters
            .get(character_id)
            .await?
            .ok_or(LedgerError::CharacterNotFound(character_id))
    }
}
