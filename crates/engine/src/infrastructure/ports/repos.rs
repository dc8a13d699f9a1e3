//! Repository port traits for the record store.
//!
//! One trait per record kind. Gear traits mirror the store's relation
//! accessors: `find_by_character` is the criteria query used for existence
//! checks, `get_equipped` follows the character→gear link and fails with
//! `RepoError::NotFound` when nothing is linked.

use async_trait::async_trait;
use questledger_domain::{Armor, Character, CharacterId, Skill, Weapon};

use super::error::RepoError;

// =============================================================================
// Character Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    /// Overwrite the stored snapshot with the same id.
    async fn update(&self, character: &Character) -> Result<(), RepoError>;
}

// =============================================================================
// Gear Storage (one per record kind)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeaponRepo: Send + Sync {
    async fn find_by_character(&self, character_id: CharacterId)
        -> Result<Vec<Weapon>, RepoError>;
    async fn get_equipped(&self, character_id: CharacterId) -> Result<Weapon, RepoError>;
    async fn create(&self, weapon: &Weapon) -> Result<Weapon, RepoError>;
    /// Remove every weapon linked to the character. Deleting nothing is `Ok`.
    async fn delete_for_character(&self, character_id: CharacterId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArmorRepo: Send + Sync {
    async fn find_by_character(&self, character_id: CharacterId) -> Result<Vec<Armor>, RepoError>;
    async fn get_equipped(&self, character_id: CharacterId) -> Result<Armor, RepoError>;
    async fn create(&self, armor: &Armor) -> Result<Armor, RepoError>;
    /// Remove every armor piece linked to the character. Deleting nothing is `Ok`.
    async fn delete_for_character(&self, character_id: CharacterId) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillRepo: Send + Sync {
    async fn find_by_character(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError>;
    /// Skills are a to-many link; an empty list means none are attached.
    async fn get_equipped(&self, character_id: CharacterId) -> Result<Vec<Skill>, RepoError>;
    async fn create(&self, skill: &Skill) -> Result<Skill, RepoError>;
    /// Remove every skill linked to the character. Deleting nothing is `Ok`.
    async fn delete_for_character(&self, character_id: CharacterId) -> Result<(), RepoError>;
}
