//! Level-up.

use questledger_domain::{CharacterId, LevelUpOutcome};

use super::{Ledger, LedgerError};

impl Ledger {
    /// Spend the character's banked experience on as many levels as it pays for.
    ///
    /// The resulting snapshot is always written back, including when no level
    /// is gained and it equals what was loaded.
    pub async fn level_up(&self, character_id: CharacterId) -> Result<LevelUpOutcome, LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        let character = self.load_character(character_id).await?;
        let outcome = character.level_up(&self.rules)?;

        self.characters.update(&outcome.character).await?;

        if outcome.gained_levels() {
            tracing::info!(
                %character_id,
                levels = outcome.levels,
                level = outcome.character.level,
                "Character levelled up"
            );
        } else {
            tracing::debug!(
                %character_id,
                current_exp = character.current_exp,
                next_level_exp = character.next_level_exp,
                "Not enough experience to level up"
            );
        }

        Ok(outcome)
    }
}
