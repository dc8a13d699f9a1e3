//! QuestLedger domain: character and gear records plus the pure stat
//! transitions applied to them. Nothing here touches storage.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Armor, ArmorDraft, Character, LevelUpOutcome, Skill, SkillDraft, Weapon, WeaponDraft,
};

pub use error::DomainError;

pub use ids::{ArmorId, CharacterId, SkillId, WeaponId};

pub use value_objects::{ProgressionRules, StatBonus};
