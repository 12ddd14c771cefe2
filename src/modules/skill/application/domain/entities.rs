use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const MIN_SKILL_LEVEL: i32 = 1;
pub const MAX_SKILL_LEVEL: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    #[error("Skill level must be between {MIN_SKILL_LEVEL} and {MAX_SKILL_LEVEL}, got {0}")]
    LevelOutOfRange(i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: String,
    #[schema(example = "Python")]
    pub name: String,
    #[schema(example = "Development")]
    pub category: String,
    /// Proficiency between 1 and 100
    #[schema(example = 80, minimum = 1, maximum = 100)]
    pub level: i32,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl Skill {
    /// Builds a skill with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        level: i32,
    ) -> Result<Self, SkillError> {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&level) {
            return Err(SkillError::LevelOutOfRange(level));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            level,
            icon: None,
            description: None,
        })
    }
}
