//! Domain entities - records with identity

mod armor;
mod character;
mod skill;
mod weapon;

pub use armor::{Armor, ArmorDraft};
pub use character::{Character, LevelUpOutcome};
pub use skill::{Skill, SkillDraft};
pub use weapon::{Weapon, WeaponDraft};
