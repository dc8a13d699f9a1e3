//! Read-only view of what a character has equipped.

use questledger_domain::{Armor, CharacterId, Skill, Weapon};
use serde::Serialize;

use super::{Ledger, LedgerError};
use crate::infrastructure::ports::RepoError;

/// Equipped gear per slot; `None` marks an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Loadout {
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
    /// First attached skill.
    pub skill: Option<Skill>,
}

impl Ledger {
    /// Look up the character's weapon, armor and skill.
    ///
    /// Each slot is checked for existence before its relation is followed, so
    /// an empty slot comes back as `None` instead of a not-found error. The
    /// character's lock is held for the whole read so the three slots come
    /// from one consistent state; a relation that still reports not-found is
    /// treated as an empty slot. Writes nothing.
    pub async fn query_equipment(&self, character_id: CharacterId) -> Result<Loadout, LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        let weapon = if self.weapons.find_by_character(character_id).await?.is_empty() {
            None
        } else {
            empty_if_not_found(self.weapons.get_equipped(character_id).await)?
        };

        let armor = if self.armor.find_by_character(character_id).await?.is_empty() {
            None
        } else {
            empty_if_not_found(self.armor.get_equipped(character_id).await)?
        };

        let skill = if self.skills.find_by_character(character_id).await?.is_empty() {
            None
        } else {
            self.skills
                .get_equipped(character_id)
                .await?
                .into_iter()
                .next()
        };

        Ok(Loadout {
            weapon,
            armor,
            skill,
        })
    }
}

fn empty_if_not_found<T>(result: Result<T, RepoError>) -> Result<Option<T>, RepoError> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
