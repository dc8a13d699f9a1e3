//! Weapon entity - the single piece occupying a character's weapon slot

use serde::{Deserialize, Serialize};

use crate::value_objects::StatBonus;
use crate::{CharacterId, WeaponId};

/// Weapon payload as supplied by a caller, before it is linked to anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponDraft {
    pub name: String,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub defence: i32,
}

/// A weapon linked to a character.
///
/// The store does not limit how many weapons point at one character; the
/// ledger keeps it to one by deleting the old record before creating a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: WeaponId,
    pub character_id: CharacterId,
    pub name: String,
    pub attack: i32,
    pub defence: i32,
}

impl Weapon {
    pub fn new(character_id: CharacterId, draft: WeaponDraft) -> Self {
        Self {
            id: WeaponId::new(),
            character_id,
            name: draft.name,
            attack: draft.attack,
            defence: draft.defence,
        }
    }

    pub fn bonus(&self) -> StatBonus {
        StatBonus::new(self.attack, self.defence)
    }
}
