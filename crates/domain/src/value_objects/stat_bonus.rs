//! StatBonus - the attack/defence contribution of a piece of gear

use serde::{Deserialize, Serialize};

/// Additive attack/defence contribution.
///
/// A character's `attack`/`defence` are running totals; gear never stores a
/// base value, so every bonus that is applied must later be removed with the
/// exact same numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatBonus {
    pub attack: i32,
    pub defence: i32,
}

impl StatBonus {
    pub fn new(attack: i32, defence: i32) -> Self {
        Self { attack, defence }
    }

    /// `(attack, defence)` with this bonus added, or `None` if either total
    /// leaves the `i32` range.
    pub fn applied_to(self, attack: i32, defence: i32) -> Option<(i32, i32)> {
        Some((
            attack.checked_add(self.attack)?,
            defence.checked_add(self.defence)?,
        ))
    }

    /// `(attack, defence)` with this bonus taken away, or `None` if either
    /// total leaves the `i32` range.
    pub fn removed_from(self, attack: i32, defence: i32) -> Option<(i32, i32)> {
        Some((
            attack.checked_sub(self.attack)?,
            defence.checked_sub(self.defence)?,
        ))
    }
}
