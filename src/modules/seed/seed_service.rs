use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::sample_data::{
    sample_projects, sample_research, sample_skills, InvalidPublicationDate,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::modules::research::application::ports::outgoing::{
    ResearchRepository, ResearchRepositoryError,
};
use crate::modules::skill::application::domain::entities::SkillError;
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    SkillRepository, SkillRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Seeding projects failed: {0}")]
    Projects(#[from] ProjectRepositoryError),

    #[error("Seeding research failed: {0}")]
    Research(#[from] ResearchRepositoryError),

    #[error("Seeding skills failed: {0}")]
    Skills(#[from] SkillRepositoryError),

    #[error("Invalid sample research note: {0}")]
    InvalidResearch(#[from] InvalidPublicationDate),

    #[error("Invalid sample skill: {0}")]
    InvalidSkill(#[from] SkillError),
}

/// Rows inserted per collection by one seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: u64,
    pub research: u64,
    pub skills: u64,
}

/// Fills empty collections with sample data. Collections that already hold
/// any row are left untouched.
pub struct SeedService {
    projects: Arc<dyn ProjectRepository>,
    research: Arc<dyn ResearchRepository>,
    skills: Arc<dyn SkillRepository>,
}

impl SeedService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        research: Arc<dyn ResearchRepository>,
        skills: Arc<dyn SkillRepository>,
    ) -> Self {
        Self {
            projects,
            research,
            skills,
        }
    }

    pub async fn run(&self) -> Result<SeedReport, SeedError> {
        let now = Utc::now();
        let mut report = SeedReport::default();

        if self.projects.count().await? == 0 {
            report.projects = self.projects.insert_many(sample_projects(now)).await?;
            info!("Seeded {} projects", report.projects);
        }

        if self.research.count().await? == 0 {
            report.research = self.research.insert_many(sample_research(now)?).await?;
            info!("Seeded {} research notes", report.research);
        }

        if self.skills.count().await? == 0 {
            report.skills = self.skills.insert_many(sample_skills()?).await?;
            info!("Seeded {} skills", report.skills);
        }

        Ok(report)
    }
}
