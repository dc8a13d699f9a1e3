//! Application state and composition.

use std::sync::Arc;

use questledger_domain::{DomainError, ProgressionRules};

use crate::commands::{self, LedgerCommand, LedgerReply};
use crate::infrastructure::memory_store::InMemoryStore;
use crate::use_cases::{Ledger, LedgerError, LedgerRepos};

/// Main application state.
pub struct App {
    pub ledger: Arc<Ledger>,
}

impl App {
    /// Wire the ledger over arbitrary store ports.
    pub fn new(repos: LedgerRepos, rules: ProgressionRules) -> Result<Self, DomainError> {
        Ok(Self {
            ledger: Arc::new(Ledger::new(repos, rules)?),
        })
    }

    /// Wire the ledger over a single in-memory store serving all four ports.
    pub fn in_memory(
        store: Arc<InMemoryStore>,
        rules: ProgressionRules,
    ) -> Result<Self, DomainError> {
        let repos = LedgerRepos {
            characters: store.clone(),
            weapons: store.clone(),
            armor: store.clone(),
            skills: store,
        };
        Self::new(repos, rules)
    }

    pub async fn execute(&self, command: LedgerCommand) -> Result<LedgerReply, LedgerError> {
        let character_id = command.character_id();
        tracing::debug!(%character_id, ?command, "Executing command");
        commands::dispatch(&self.ledger, command).await
    }
}
