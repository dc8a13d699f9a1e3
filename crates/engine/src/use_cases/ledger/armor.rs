//! Armor slot: equip and unequip.

use questledger_domain::{Armor, ArmorDraft, CharacterId};

use super::{Ledger, LedgerError};

impl Ledger {
    /// Equip a new armor piece, replacing whatever occupies the slot.
    ///
    /// The new bonus is added and the old one subtracted as separate deltas.
    /// Writes run as: delete old armor (only if some was found) → update
    /// character → create new armor. The new totals are computed before the
    /// first write, so a stat overflow leaves the store untouched.
    pub async fn equip_armor(
        &self,
        character_id: CharacterId,
        draft: ArmorDraft,
    ) -> Result<Armor, LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        let character = self.load_character(character_id).await?;
        let incoming = Armor::new(character_id, draft);

        let outgoing = if self
            .armor
            .find_by_character(character_id)
            .await?
            .is_empty()
        {
            None
        } else {
            Some(self.armor.get_equipped(character_id).await?)
        };

        let updated = character.equip(incoming.bonus(), outgoing.as_ref().map(Armor::bonus))?;

        if outgoing.is_some() {
            self.armor.delete_for_character(character_id).await?;
        }

        if let Err(e) = self.characters.update(&updated).await {
            return Err(match outgoing {
                Some(_) => LedgerError::diverged(character_id, "update character", e),
                None => e.into(),
            });
        }

        let stored = self
            .armor
            .create(&incoming)
            .await
            .map_err(|e| LedgerError::diverged(character_id, "create armor", e))?;

        tracing::info!(
            %character_id,
            armor_id = %stored.id,
            replaced = outgoing.is_some(),
            attack = updated.attack,
            defence = updated.defence,
            "Armor equipped"
        );

        Ok(stored)
    }

    /// Remove the equipped armor and reverse its bonus. Nothing equipped is a no-op.
    pub async fn unequip_armor(&self, character_id: CharacterId) -> Result<(), LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        if self
            .armor
            .find_by_character(character_id)
            .await?
            .is_empty()
        {
            tracing::debug!(%character_id, "No armor equipped");
            return Ok(());
        }

        let old = self.armor.get_equipped(character_id).await?;
        let character = self.load_character(character_id).await?;
        let updated = character.unequip(old.bonus())?;

        self.armor.delete_for_character(character_id).await?;
        self.characters
            .update(&updated)
            .await
            .map_err(|e| LedgerError::diverged(character_id, "update character", e))?;

        tracing::info!(
            %character_id,
            armor_id = %old.id,
            attack = updated.attack,
            defence = updated.defence,
            "Armor unequipped"
        );

        Ok(())
    }
}
