//! Character entity - combat statistics and level progression
//!
//! A character owns its own copy of derived stats. `attack` and `defence` are
//! always the current total: whatever base the character started with plus the
//! bonuses of the weapon and armor linked to it. No base value is stored, so
//! every transition here works in deltas.
//!
//! All transitions are pure: they take `&self` and return a new snapshot,
//! leaving persistence to the caller.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ProgressionRules, StatBonus};
use crate::{CharacterId, DomainError};

/// A player character's progression and combat snapshot.
///
/// # Simple Data Struct
///
/// Fields are public. Values below zero are not rejected: unequipping a bonus
/// that was never applied can drive `attack`/`defence` negative, and that is
/// reported as-is rather than clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub current_exp: u64,
    /// Experience needed for the next level, counted from `current_exp == 0`.
    pub next_level_exp: u64,
    pub max_health: i32,
    pub current_health: i32,
    pub max_mana: i32,
    pub current_mana: i32,
    pub attack: i32,
    pub defence: i32,
}

/// Result of applying a level-up to a character snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUpOutcome {
    pub character: Character,
    /// Number of levels gained; zero means the snapshot is unchanged.
    pub levels: u32,
}

impl LevelUpOutcome {
    pub fn gained_levels(&self) -> bool {
        self.levels > 0
    }
}

impl Character {
    /// A fresh level 1 character with starter stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            level: 1,
            current_exp: 0,
            next_level_exp: 100,
            max_health: 100,
            current_health: 100,
            max_mana: 50,
            current_mana: 50,
            attack: 10,
            defence: 5,
        }
    }

    pub fn with_exp(mut self, current_exp: u64, next_level_exp: u64) -> Self {
        self.current_exp = current_exp;
        self.next_level_exp = next_level_exp;
        self
    }

    pub fn with_combat(mut self, attack: i32, defence: i32) -> Self {
        self.attack = attack;
        self.defence = defence;
        self
    }

    /// Consume banked experience and apply every level it pays for.
    ///
    /// Experience can cross several thresholds at once, so thresholds are
    /// consumed in a loop; each one raises the next threshold by
    /// `rules.exp_increment`. The gained levels are then applied in one step
    /// and health and mana are restored to their new maximums.
    ///
    /// Fails with [`DomainError::Overflow`] instead of wrapping when the
    /// threshold, level or any grown stat leaves its range; `self` is never
    /// partially updated.
    ///
    /// `rules` must have passed [`ProgressionRules::validate`]; with a zero
    /// increment and a zero threshold the loop never ends.
    pub fn level_up(&self, rules: &ProgressionRules) -> Result<LevelUpOutcome, DomainError> {
        let mut current_exp = self.current_exp;
        let mut next_level_exp = self.next_level_exp;
        let mut levels: u32 = 0;

        while current_exp >= next_level_exp {
            levels = levels
                .checked_add(1)
                .ok_or_else(|| self.overflow("levels gained"))?;
            current_exp -= next_level_exp;
            next_level_exp = next_level_exp
                .checked_add(rules.exp_increment)
                .ok_or_else(|| self.overflow("next level experience"))?;
        }

        if levels == 0 {
            return Ok(LevelUpOutcome {
                character: self.clone(),
                levels,
            });
        }

        let gained = i32::try_from(levels).map_err(|_| self.overflow("levels gained"))?;
        let grow = |base: i32, per_level: i32, what: &str| {
            per_level
                .checked_mul(gained)
                .and_then(|growth| base.checked_add(growth))
                .ok_or_else(|| self.overflow(what))
        };
        let max_health = grow(self.max_health, rules.health_per_level, "max health")?;
        let max_mana = grow(self.max_mana, rules.mana_per_level, "max mana")?;

        Ok(LevelUpOutcome {
            character: Character {
                level: self
                    .level
                    .checked_add(levels)
                    .ok_or_else(|| self.overflow("level"))?,
                current_exp,
                next_level_exp,
                max_health,
                current_health: max_health,
                max_mana,
                current_mana: max_mana,
                attack: grow(self.attack, rules.attack_per_level, "attack")?,
                defence: grow(self.defence, rules.defence_per_level, "defence")?,
                ..self.clone()
            },
            levels,
        })
    }

    /// Apply an incoming gear bonus, then reverse the bonus of the piece it
    /// replaces.
    ///
    /// The two deltas are applied independently and never diffed, so
    /// re-equipping an identical piece nets out to the same totals. Either
    /// step leaving the `i32` range is an overflow error.
    pub fn equip(
        &self,
        incoming: StatBonus,
        outgoing: Option<StatBonus>,
    ) -> Result<Character, DomainError> {
        let (attack, defence) = incoming
            .applied_to(self.attack, self.defence)
            .ok_or_else(|| self.overflow("attack/defence with incoming gear"))?;
        let (attack, defence) = match outgoing {
            Some(old) => old
                .removed_from(attack, defence)
                .ok_or_else(|| self.overflow("attack/defence without replaced gear"))?,
            None => (attack, defence),
        };
        Ok(self.clone().with_combat(attack, defence))
    }

    /// Reverse the bonus of a piece being removed.
    pub fn unequip(&self, outgoing: StatBonus) -> Result<Character, DomainError> {
        let (attack, defence) = outgoing
            .removed_from(self.attack, self.defence)
            .ok_or_else(|| self.overflow("attack/defence without removed gear"))?;
        Ok(self.clone().with_combat(attack, defence))
    }

    fn overflow(&self, what: &str) -> DomainError {
        DomainError::overflow(format!("{what} of character {}", self.id))
    }
}
