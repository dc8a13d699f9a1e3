//! Shared setup for end-to-end tests.

use std::sync::Arc;

use questledger_domain::{ArmorDraft, Character, CharacterId, ProgressionRules, WeaponDraft};

use crate::infrastructure::memory_store::InMemoryStore;
use crate::infrastructure::ports::CharacterRepo;
use crate::App;

/// App plus direct handle on the store behind it.
pub struct E2ETestContext {
    pub app: App,
    pub store: Arc<InMemoryStore>,
}

impl E2ETestContext {
    pub fn with_character(character: Character) -> (Self, CharacterId) {
        let id = character.id;
        let store = Arc::new(InMemoryStore::with_characters([character]));
        let app = App::in_memory(store.clone(), ProgressionRules::default())
            .expect("default rules are valid");
        (Self { app, store }, id)
    }

    /// Current persisted snapshot.
    pub async fn character(&self, id: CharacterId) -> Character {
        self.store
            .get(id)
            .await
            .expect("store read should succeed")
            .expect("character should exist")
    }
}

pub fn weapon(name: &str, attack: i32, defence: i32) -> WeaponDraft {
    WeaponDraft {
        name: name.to_string(),
        attack,
        defence,
    }
}

pub fn armor(name: &str, attack: i32, defence: i32) -> ArmorDraft {
    ArmorDraft {
        name: name.to_string(),
        attack,
        defence,
    }
}
