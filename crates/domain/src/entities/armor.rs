//! Armor entity - the single piece occupying a character's armor slot

use serde::{Deserialize, Serialize};

use crate::value_objects::StatBonus;
use crate::{ArmorId, CharacterId};

/// Armor payload as supplied by a caller, before it is linked to anyone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorDraft {
    pub name: String,
    #[serde(default)]
    pub attack: i32,
    #[serde(default)]
    pub defence: i32,
}

/// Armor linked to a character. At most one per character, kept so by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    pub id: ArmorId,
    pub character_id: CharacterId,
    pub name: String,
    pub attack: i32,
    pub defence: i32,
}

impl Armor {
    pub fn new(character_id: CharacterId, draft: ArmorDraft) -> Self {
        Self {
            id: ArmorId::new(),
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
