mod list_skills_service;

pub use list_skills_service::ListSkillsService;
