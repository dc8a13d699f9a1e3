//! Level progression rules

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Per-level growth applied by a level-up, plus the experience threshold step.
///
/// Each level gained raises `next_level_exp` by `exp_increment` and adds the
/// per-level amounts to the character's maximums and combat stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionRules {
    pub exp_increment: u64,
    pub health_per_level: i32,
    pub mana_per_level: i32,
    pub attack_per_level: i32,
    pub defence_per_level: i32,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            exp_increment: 100,
            health_per_level: 10,
            mana_per_level: 5,
            attack_per_level: 3,
            defence_per_level: 1,
        }
    }
}

impl ProgressionRules {
    /// Reject rules the level loop cannot terminate under.
    ///
    /// With a zero increment, a character whose threshold is zero would gain
    /// levels forever.
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.exp_increment == 0 {
            return Err(DomainError::validation(
                "exp increment must be greater than zero",
            ));
        }
        Ok(self)
    }
}
