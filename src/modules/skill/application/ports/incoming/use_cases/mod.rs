mod list_skills;

pub use list_skills::{ListSkillsError, ListSkillsUseCase};
