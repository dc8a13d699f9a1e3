//! Port traits for the store boundary.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete
//! types. The ledger never sees how records are stored; swapping the
//! in-memory store for a database means implementing these four traits.

mod error;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{ArmorRepo, CharacterRepo, SkillRepo, WeaponRepo};

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockArmorRepo, MockCharacterRepo, MockSkillRepo, MockWeaponRepo};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
