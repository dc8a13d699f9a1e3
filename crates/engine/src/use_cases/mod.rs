//! Use cases - operations callers run against the store.
//!
//! The ledger is the only use case: it owns the stat-accounting rules for
//! levelling and for attaching or detaching gear.

pub mod ledger;

pub use ledger::{Ledger, LedgerError, LedgerRepos, Loadout};
