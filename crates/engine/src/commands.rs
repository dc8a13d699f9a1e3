//! Serializable command surface over the ledger.
//!
//! Commands are internally tagged by `op`; replies by `result`. Field names
//! are camelCase on the wire.
//!
//! ```json
//! {"op": "equip_weapon", "characterId": "…", "weapon": {"name": "Axe", "attack": 5}}
//! ```

use questledger_domain::{
    Armor, ArmorDraft, Character, CharacterId, Skill, SkillDraft, Weapon, WeaponDraft,
};
use serde::{Deserialize, Serialize};

use crate::use_cases::{Ledger, LedgerError, Loadout};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum LedgerCommand {
    LevelUp {
        character_id: CharacterId,
    },
    EquipWeapon {
        character_id: CharacterId,
        weapon: WeaponDraft,
    },
    EquipArmor {
        character_id: CharacterId,
        armor: ArmorDraft,
    },
    ReplaceSkill {
        character_id: CharacterId,
        skill: SkillDraft,
    },
    UnequipWeapon {
        character_id: CharacterId,
    },
    UnequipArmor {
        character_id: CharacterId,
    },
    UnequipSkill {
        character_id: CharacterId,
    },
    QueryEquipment {
        character_id: CharacterId,
    },
}

impl LedgerCommand {
    pub fn character_id(&self) -> CharacterId {
        match self {
            Self::LevelUp { character_id }
            | Self::EquipWeapon { character_id, .. }
            | Self::EquipArmor { character_id, .. }
            | Self::ReplaceSkill { character_id, .. }
            | Self::UnequipWeapon { character_id }
            | Self::UnequipArmor { character_id }
            | Self::UnequipSkill { character_id }
            | Self::QueryEquipment { character_id } => *character_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum LedgerReply {
    LevelledUp { levels: u32, character: Character },
    WeaponEquipped { weapon: Weapon },
    ArmorEquipped { armor: Armor },
    SkillReplaced { skill: Skill },
    Unequipped,
    Equipment { loadout: Loadout },
}

/// Run one command against the ledger.
pub async fn dispatch(ledger: &Ledger, command: LedgerCommand) -> Result<LedgerReply, LedgerError> {
    let reply = match command {
        LedgerCommand::LevelUp { character_id } => {
            let outcome = ledger.level_up(character_id).await?;
            LedgerReply::LevelledUp {
                levels: outcome.levels,
                character: outcome.character,
            }
        }
        LedgerCommand::EquipWeapon {
            character_id,
            weapon,
        } => LedgerReply::WeaponEquipped {
            weapon: ledger.equip_weapon(character_id, weapon).await?,
        },
        LedgerCommand::EquipArmor {
            character_id,
            armor,
        } => LedgerReply::ArmorEquipped {
            armor: ledger.equip_armor(character_id, armor).await?,
        },
        LedgerCommand::ReplaceSkill {
            character_id,
            skill,
        } => LedgerReply::SkillReplaced {
            skill: ledger.replace_skill(character_id, skill).await?,
        },
        LedgerCommand::UnequipWeapon { character_id } => {
            ledger.unequip_weapon(character_id).await?;
            LedgerReply::Unequipped
        }
        LedgerCommand::UnequipArmor { character_id } => {
            ledger.unequip_armor(character_id).await?;
            LedgerReply::Unequipped
        }
        LedgerCommand::UnequipSkill { character_id } => {
            ledger.unequip_skill(character_id).await?;
            LedgerReply::Unequipped
        }
        LedgerCommand::QueryEquipment { character_id } => LedgerReply::Equipment {
            loadout: ledger.query_equipment(character_id).await?,
        },
    };
    Ok(reply)
}
