//! In-memory record store for development and testing
//!
//! Implements every repository port over `DashMap` tables. Gear rows are
//! grouped by owning character and kept in insertion order, so
//! `find_by_character` and `get_equipped` see the oldest link first. Nothing
//! is persisted across process restarts.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dashmap::DashMap;
use questledger_domain::{Armor, Character, CharacterId, Skill, Weapon};

use crate::infrastructure::ports::{ArmorRepo, CharacterRepo, RepoError, SkillRepo, WeaponRepo};

/// Rows of one gear kind, keyed by the owning character.
struct GearTable<T> {
    entity_type: &'static str,
    rows: DashMap<CharacterId, Vec<T>>,
}

impl<T: Clone> GearTable<T> {
    fn new(entity_type: &'static str) -> Self {
        Self {
            entity_type,
            rows: DashMap::new(),
        }
    }

    fn find(&self, character_id: CharacterId) -> Vec<T> {
        self.rows
            .get(&character_id)
            .map(|rows| rows.value().clone())
            .unwrap_or_default()
    }

    fn first(&self, character_id: CharacterId) -> Result<T, RepoError> {
        self.rows
            .get(&character_id)
            .and_then(|rows| rows.first().cloned())
            .ok_or_else(|| RepoError::not_found(self.entity_type, character_id))
    }

    fn insert(&self, character_id: CharacterId, row: T) -> T {
        self.rows
            .entry(character_id)
            .or_default()
            .push(row.clone());
        row
    }

    fn remove_all(&self, character_id: CharacterId) -> usize {
        self.rows
            .remove(&character_id)
            .map(|(_, rows)| rows.len())
            .unwrap_or(0)
    }
}

/// Failure to load a seed file.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Record store holding characters, weapons, armor and skills in memory.
pub struct InMemoryStore {
    characters: DashMap<CharacterId, Character>,
    weapons: GearTable<Weapon>,
    armor: GearTable<Armor>,
    skills: GearTable<Skill>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            characters: DashMap::new(),
            weapons: GearTable::new("Weapon"),
            armor: GearTable::new("Armor"),
            skills: GearTable::new("Skill"),
        }
    }

    /// Seed the store with characters created outside the ledger.
    pub fn with_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let store = Self::new();
        for character in characters {
            store.insert_character(character);
        }
        store
    }

    /// Seed the store from a JSON file holding an array of characters.
    pub async fn from_seed_file(path: &Path) -> Result<Self, SeedError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let characters: Vec<Character> =
            serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::with_characters(characters))
    }

    /// Insert or replace a character record.
    pub fn insert_character(&self, character: Character) {
        self.characters.insert(character.id, character);
    }

    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    fn ensure_character(&self, character_id: CharacterId) -> Result<(), RepoError> {
        if self.characters.contains_key(&character_id) {
            Ok(())
        } else {
            Err(RepoError::constraint(format!(
                "no character {character_id} to link gear to"
            )))
        }
    }
}

#[async_trait]
impl CharacterRepo for InMemoryStore {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|c| c.value().clone()))
    }

    async fn update(&self, character: &Character) -> Result<(), RepoError> {
        match self.characters.get_mut(&character.id) {
            Some(mut stored) => {
                *stored = character.clone();
                Ok(())
            }
            None => Err(RepoError::not_found("Character", character.id)),
        }
    }
}

#[async_trait]
impl WeaponRepo for InMemoryStore {
    async fn find_by_character(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<Weapon>, RepoError> {
        Ok(self.weapons.find(character_id))
    }

    async fn get_equipped(&self, character_id: CharacterId) -> Result<Weapon, RepoError> {
        self.weapons.first(character_id)
    }

    async fn create(&self, weapon: &Weapon) -> Result<Weapon, RepoError> {
        self.ensure_character(weapon.character_id)?;
        Ok(self.weapons.insert(weapon.character_id, weapon.clone()))
    }

    async fn delete_for_character(&self, character_id: CharacterId) -> Result<(), RepoError> {
        let removed = self.weapons.remove_all(character_id);
        tracing::trace!(%character_id, removed, "Deleted weapons");
        Ok(())
    }
}

#[async_trait]
impl ArmorRepo for InMemoryStore {
    async fn find_by_character(&self, character_id: CharacterId) -> Result<Vec<Armor>, RepoError> {
        Ok(self.armor.find(character_id))
    }

    async fn get_equipped(&self, character_id: CharacterId) -> Result<Armor, RepoError> {
        self.armor.first(character_id)
    }

    async fn create(&self, armor: &Armor) -> Result<Armor, RepoError> {
        self.ensure_character(armor.character_id)?;
        Ok(self.armor.insert(armor.character_id, armor.clone()))
    }

    async fn delete_for_character(&self, character_id: CharacterId) -> Result<(), RepoError> {
        let removed = self.armor.remove_all(character_id);
        tracing::trace!(%character_id, removed, "Deleted armor");
        Ok(())
    }
}

#[async_trait]
impl SkillRepo for InMemoryStore {
    async fn find_by_character(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError> {
        Ok(self.skills.find(character_id))
    }

    async fn get_equipped(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError> {
        Ok(self.skills.find(character_id))
    }

    async fn create(&self, skill: &Skill) -> Result<Skill, RepoError> {
        self.ensure_character(skill.character_id)?;
        Ok(self.skills.insert(skill.character_id, skill.clone()))
    }

    async fn delete_for_character(&self, character_id: CharacterId) -> Result<(), RepoError> {
        let removed = self.skills.remove_all(character_id);
        tracing::trace!(%character_id, removed, "Deleted skills");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questledger_domain::{ArmorDraft, SkillDraft, WeaponDraft};

    fn sword(owner: CharacterId) -> Weapon {
        Weapon::new(
            owner,
            WeaponDraft {
                name: "Sword".to_string(),
                attack: 3,
                defence: 1,
            },
        )
    }

    fn seeded() -> (InMemoryStore, CharacterId) {
        let character = Character::new("Aria");
        let id = character.id;
        (InMemoryStore::with_characters([character]), id)
    }

    #[tokio::test]
    async fn deleting_nothing_is_ok_for_every_gear_kind() {
        let (store, id) = seeded();

        assert!(WeaponRepo::delete_for_character(&store, id).await.is_ok());
        assert!(ArmorRepo::delete_for_character(&store, id).await.is_ok());
        assert!(SkillRepo::delete_for_character(&store, id).await.is_ok());

        // Unknown owners too
        let stranger = CharacterId::new();
        assert!(SkillRepo::delete_for_character(&store, stranger).await.is_ok());
    }

    #[tokio::test]
    async fn get_equipped_on_empty_slot_is_not_found() {
        let (store, id) = seeded();

        let weapon = WeaponRepo::get_equipped(&store, id).await;
        let armor = ArmorRepo::get_equipped(&store, id).await;

        assert!(matches!(weapon, Err(e) if e.is_not_found()));
        assert!(matches!(armor, Err(e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn store_does_not_limit_gear_per_character() {
        let (store, id) = seeded();
        let first = sword(id);
        let second = sword(id);

        WeaponRepo::create(&store, &first).await.expect("create first");
        WeaponRepo::create(&store, &second).await.expect("create second");

        let found = WeaponRepo::find_by_character(&store, id)
            .await
            .expect("find");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, first.id);
        assert_eq!(
            WeaponRepo::get_equipped(&store, id).await.expect("get").id,
            first.id
        );
    }

    #[tokio::test]
    async fn delete_for_character_only_touches_that_character() {
        let aria = Character::new("Aria");
        let bram = Character::new("Bram");
        let (aria_id, bram_id) = (aria.id, bram.id);
        let store = InMemoryStore::with_characters([aria, bram]);
        for owner in [aria_id, bram_id] {
            ArmorRepo::create(
                &store,
                &Armor::new(
                    owner,
                    ArmorDraft {
                        name: "Leather".to_string(),
                        attack: 0,
                        defence: 2,
                    },
                ),
            )
            .await
            .expect("create armor");
        }

        ArmorRepo::delete_for_character(&store, aria_id)
            .await
            .expect("delete");

        assert!(ArmorRepo::find_by_character(&store, aria_id)
            .await
            .expect("find")
            .is_empty());
        assert_eq!(
            ArmorRepo::find_by_character(&store, bram_id)
                .await
                .expect("find")
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn gear_for_unknown_character_is_rejected() {
        let store = InMemoryStore::new();
        let skill = Skill::new(
            CharacterId::new(),
            SkillDraft {
                name: "Parry".to_string(),
                description: None,
            },
        );

        let result = SkillRepo::create(&store, &skill).await;

        assert!(matches!(result, Err(RepoError::ConstraintViolation(_))));
    }

    #[tokio::test]
    async fn seed_file_populates_characters() {
        let aria = Character::new("Aria").with_exp(40, 100);
        let bram = Character::new("Bram");
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("characters.json");
        let json = serde_json::to_string(&[&aria, &bram]).expect("serialize seed");
        tokio::fs::write(&path, json).await.expect("write seed");

        let store = InMemoryStore::from_seed_file(&path).await.expect("load seed");

        assert_eq!(store.character_count(), 2);
        let loaded = CharacterRepo::get(&store, aria.id)
            .await
            .expect("get")
            .expect("seeded");
        assert_eq!(loaded, aria);
    }

    #[tokio::test]
    async fn seed_file_errors_name_the_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let malformed = dir.path().join("broken.json");
        tokio::fs::write(&malformed, r#"[{"name":"Aria"}]"#)
            .await
            .expect("write seed");

        let missing = InMemoryStore::from_seed_file(&dir.path().join("absent.json")).await;
        let broken = InMemoryStore::from_seed_file(&malformed).await;

        assert!(matches!(missing, Err(SeedError::Read { .. })));
        assert!(matches!(broken, Err(SeedError::Parse { path, .. }) if path == malformed));
    }

    #[tokio::test]
    async fn update_replaces_snapshot_and_rejects_unknown_ids() {
        let (store, id) = seeded();
        let mut character = CharacterRepo::get(&store, id)
            .await
            .expect("get")
            .expect("seeded");
        character.attack = 99;

        store.update(&character).await.expect("update");
        let stored = CharacterRepo::get(&store, id)
            .await
            .expect("get")
            .expect("seeded");
        assert_eq!(stored.attack, 99);

        let missing = store.update(&Character::new("Ghost")).await;
        assert!(matches!(missing, Err(e) if e.is_not_found()));
    }
}
