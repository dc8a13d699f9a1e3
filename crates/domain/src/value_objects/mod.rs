//! Value objects shared by the character and gear records.

mod progression;
mod stat_bonus;

pub use progression::ProgressionRules;
pub use stat_bonus::StatBonus;
