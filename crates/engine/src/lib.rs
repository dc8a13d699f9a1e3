//! QuestLedger Engine library.
//!
//! Character progression and equipment accounting over a record store.
//!
//! ## Structure
//!
//! - `use_cases/` - The ledger: level-up, equip/unequip, loadout queries
//! - `infrastructure/` - Store ports, in-memory store, locks, configuration
//! - `commands` - Serializable command surface
//! - `app` - Application composition

pub mod app;
pub mod commands;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end flows against the in-memory store.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
