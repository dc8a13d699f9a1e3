//! Mock wiring shared by the ledger unit tests.

use std::sync::Arc;

use questledger_domain::{Character, ProgressionRules};

use super::{Ledger, LedgerRepos};
use crate::infrastructure::ports::{
    MockArmorRepo, MockCharacterRepo, MockSkillRepo, MockWeaponRepo, RepoError,
};

/// One mock per port. A mock with no expectation panics when called, which
/// is how tests assert that a store call never happens.
pub(crate) struct MockRepos {
    pub characters: MockCharacterRepo,
    pub weapons: MockWeaponRepo,
    pub armor: MockArmorRepo,
    pub skills: MockSkillRepo,
}

impl MockRepos {
    pub fn new() -> Self {
        Self {
            characters: MockCharacterRepo::new(),
            weapons: MockWeaponRepo::new(),
            armor: MockArmorRepo::new(),
            skills: MockSkillRepo::new(),
        }
    }

    /// Expect exactly one load of `character`.
    pub fn expect_character(&mut self, character: &Character) {
        let id = character.id;
        let stored = character.clone();
        self.characters
            .expect_get()
            .withf(move |requested| *requested == id)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));
    }

    pub fn into_ledger(self) -> Ledger {
        Ledger::new(
            LedgerRepos {
                characters: Arc::new(self.characters),
                weapons: Arc::new(self.weapons),
                armor: Arc::new(self.armor),
                skills: Arc::new(self.skills),
            },
            ProgressionRules::default(),
        )
        .expect("default rules are valid")
    }
}

pub(crate) fn store_down(operation: &'static str) -> RepoError {
    RepoError::database(operation, "store unavailable")
}

pub(crate) fn hero(attack: i32, defence: i32) -> Character {
    Character::new("Aria").with_combat(attack, defence)
}
