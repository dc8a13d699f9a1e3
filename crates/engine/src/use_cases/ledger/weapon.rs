//! Weapon slot: equip and unequip.

use questledger_domain::{CharacterId, Weapon, WeaponDraft};

use super::{Ledger, LedgerError};

impl Ledger {
    /// Equip a new weapon, replacing whatever occupies the slot.
    ///
    /// The new bonus is added and the old one subtracted as separate deltas.
    /// Writes run as: delete old weapon (only if one was found) → update
    /// character → create new weapon. The new totals are computed before the
    /// first write, so a stat overflow leaves the store untouched.
    pub async fn equip_weapon(
        &self,
        character_id: CharacterId,
        draft: WeaponDraft,
    ) -> Result<Weapon, LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        let character = self.load_character(character_id).await?;
        let incoming = Weapon::new(character_id, draft);

        let outgoing = if self
            .weapons
            .find_by_character(character_id)
            .await?
            .is_empty()
        {
            None
        } else {
            Some(self.weapons.get_equipped(character_id).await?)
        };

        let updated = character.equip(incoming.bonus(), outgoing.as_ref().map(Weapon::bonus))?;

        if outgoing.is_some() {
            self.weapons.delete_for_character(character_id).await?;
        }

        if let Err(e) = self.characters.update(&updated).await {
            return Err(match outgoing {
                Some(_) => LedgerError::diverged(character_id, "update character", e),
                None => e.into(),
            });
        }

        let stored = self
            .weapons
            .create(&incoming)
            .await
            .map_err(|e| LedgerError::diverged(character_id, "create weapon", e))?;

        tracing::info!(
            %character_id,
            weapon_id = %stored.id,
            replaced = outgoing.is_some(),
            attack = updated.attack,
            defence = updated.defence,
            "Weapon equipped"
        );

        Ok(stored)
    }

    /// Remove the equipped weapon and reverse its bonus. Nothing equipped is a no-op.
    pub async fn unequip_weapon(&self, character_id: CharacterId) -> Result<(), LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        if self
            .weapons
            .find_by_character(character_id)
            .await?
            .is_empty()
        {
            tracing::debug!(%character_id, "No weapon equipped");
            return Ok(());
        }

        let old = self.weapons.get_equipped(character_id).await?;
        let character = self.load_character(character_id).await?;
        let updated = character.unequip(old.bonus())?;

        self.weapons.delete_for_character(character_id).await?;
        self.characters
            .update(&updated)
            .await
            .map_err(|e| LedgerError::diverged(character_id, "update character", e))?;

        tracing::info!(
            %character_id,
            weapon_id = %old.id,
            attack = updated.attack,
            defence = updated.defence,
            "Weapon unequipped"
        );

        Ok(())
    }
}
