//! Skills: replace and unequip.
//!
//! Skills carry no bonus, so the character snapshot is never rewritten here.
//! Unlike the gear slots, deletion is not guarded by an existence check; the
//! store treats deleting zero rows as success.

use questledger_domain::{CharacterId, Skill, SkillDraft};

use super::{Ledger, LedgerError};

impl Ledger {
    /// Drop every skill attached to the character and attach `draft` in their place.
    ///
    /// The character is read first so that an unknown id fails before any
    /// write instead of surfacing as a store constraint error on create.
    pub async fn replace_skill(
        &self,
        character_id: CharacterId,
        draft: SkillDraft,
    ) -> Result<Skill, LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        self.load_character(character_id).await?;

        self.skills.delete_for_character(character_id).await?;
        let stored = self
            .skills
            .create(&Skill::new(character_id, draft))
            .await
            .map_err(|e| LedgerError::diverged(character_id, "create skill", e))?;

        tracing::info!(%character_id, skill_id = %stored.id, "Skill replaced");
        Ok(stored)
    }

    /// Detach every skill from the character. Nothing attached is a no-op.
    pub async fn unequip_skill(&self, character_id: CharacterId) -> Result<(), LedgerError> {
        let _guard = self.locks.acquire(character_id).await;

        self.skills.delete_for_character(character_id).await?;

        tracing::info!(%character_id, "Skills removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{hero, store_down, MockRepos};
    use super::*;
    use mockall::Sequence;

    fn fireball() -> SkillDraft {
        SkillDraft {
            name: "Fireball".to_string(),
            description: Some("Hurls a ball of fire".to_string()),
        }
    }

    #[tokio::test]
    async fn replace_deletes_unconditionally_then_creates() {
        let character = hero(10, 5);
        let id = character.id;

        let mut seq = Sequence::new();
        let mut repos = MockRepos::new();
        repos.expect_character(&character);
        repos.skills.expect_find_by_character().never();
        repos
            .skills
            .expect_delete_for_character()
            .withf(move |owner| *owner == id)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        repos
            .skills
            .expect_create()
            .withf(move |s| s.character_id == id && s.name == "Fireball")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|s| Ok(s.clone()));
        repos.characters.expect_update().never();

        let stored = repos
            .into_ledger()
            .replace_skill(id, fireball())
            .await
            .expect("replace");

        assert_eq!(stored.description.as_deref(), Some("Hurls a ball of fire"));
    }

    #[tokio::test]
    async fn replace_for_missing_character_writes_nothing() {
        let mut repos = MockRepos::new();
        repos.characters.expect_get().returning(|_| Ok(None));
        repos.skills.expect_delete_for_character().never();
        repos.skills.expect_create().never();

        let result = repos
            .into_ledger()
            .replace_skill(CharacterId::new(), fireball())
            .await;

        assert!(matches!(result, Err(LedgerError::CharacterNotFound(_))));
    }

    #[tokio::test]
    async fn replace_delete_failure_is_repo_error() {
        let character = hero(10, 5);
        let id = character.id;

        let mut repos = MockRepos::new();
        repos.expect_character(&character);
        repos
            .skills
            .expect_delete_for_character()
            .returning(|_| Err(store_down("delete_skills")));
        repos.skills.expect_create().never();

        let result = repos.into_ledger().replace_skill(id, fireball()).await;

        assert!(matches!(result, Err(LedgerError::Repo(_))));
    }

    #[tokio::test]
    async fn replace_create_failure_after_delete_is_diverged() {
        let character = hero(10, 5);
        let id = character.id;

        let mut repos = MockRepos::new();
        repos.expect_character(&character);
        repos
            .skills
            .expect_delete_for_character()
            .returning(|_| Ok(()));
        repos
            .skills
            .expect_create()
            .returning(|_| Err(store_down("create_skill")));

        let result = repos.into_ledger().replace_skill(id, fireball()).await;

        assert!(matches!(
            result,
            Err(LedgerError::Diverged {
                step: "create skill",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn unequip_deletes_without_checking_existence() {
        let id = CharacterId::new();
        let mut repos = MockRepos::new();
        repos.skills.expect_find_by_character().never();
        repos.characters.expect_get().never();
        repos
            .skills
            .expect_delete_for_character()
            .withf(move |owner| *owner == id)
            .times(1)
            .returning(|_| Ok(()));

        repos
            .into_ledger()
            .unequip_skill(id)
            .await
            .expect("unequip");
    }
}
