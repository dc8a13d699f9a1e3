//! Skill entity - attached to a character with no effect on its stats

use serde::{Deserialize, Serialize};

use crate::{CharacterId, SkillId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    pub character_id: CharacterId,
    pub name: String,
    pub description: Option<String>,
}

impl Skill {
    pub fn new(character_id: CharacterId, draft: SkillDraft) -> Self {
        Self {
            id: SkillId::new(),
            character_id,
            name: draft.name,
            description: draft.description,
        }
    }
}
