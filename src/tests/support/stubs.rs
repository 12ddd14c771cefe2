use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::incoming::use_cases::{
    ListExperienceError, ListExperienceUseCase,
};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectListFilter;
use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::research::application::ports::incoming::use_cases::{
    GetResearchNoteError, GetResearchNoteUseCase, GetResearchNotesError, GetResearchNotesUseCase,
};
use crate::modules::research::application::ports::outgoing::ResearchListFilter;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillsError, ListSkillsUseCase,
};
use crate::modules::stats::application::domain::entities::PortfolioStats;
use crate::modules::stats::application::ports::incoming::use_cases::{
    GetPortfolioStatsError, GetPortfolioStatsUseCase,
};

/* --------------------------------------------------
 * Projects
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(&self, _filter: ProjectListFilter) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }

    pub fn success(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn error(err: GetSingleProjectError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: &str) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Research
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetResearchNotesUseCase {
    result: Result<Vec<ResearchNote>, GetResearchNotesError>,
}

impl StubGetResearchNotesUseCase {
    pub fn success(notes: Vec<ResearchNote>) -> Self {
        Self { result: Ok(notes) }
    }

    pub fn error(err: GetResearchNotesError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetResearchNotesUseCase for StubGetResearchNotesUseCase {
    async fn execute(
        &self,
        _filter: ResearchListFilter,
    ) -> Result<Vec<ResearchNote>, GetResearchNotesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetResearchNoteUseCase {
    result: Result<ResearchNote, GetResearchNoteError>,
}

impl StubGetResearchNoteUseCase {
    pub fn success(note: ResearchNote) -> Self {
        Self { result: Ok(note) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetResearchNoteError::NotFound),
        }
    }
}

#[async_trait]
impl GetResearchNoteUseCase for StubGetResearchNoteUseCase {
    async fn execute(&self, _research_id: &str) -> Result<ResearchNote, GetResearchNoteError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Skills / experience / stats
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubListSkillsUseCase {
    result: Result<Vec<Skill>, ListSkillsError>,
}

impl StubListSkillsUseCase {
    pub fn success(skills: Vec<Skill>) -> Self {
        Self { result: Ok(skills) }
    }

    pub fn error(err: ListSkillsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ListSkillsUseCase for StubListSkillsUseCase {
    async fn execute(&self, _category: Option<String>) -> Result<Vec<Skill>, ListSkillsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListExperienceUseCase {
    result: Result<Vec<Experience>, ListExperienceError>,
}

impl StubListExperienceUseCase {
    pub fn success(entries: Vec<Experience>) -> Self {
        Self {
            result: Ok(entries),
        }
    }
}

#[async_trait]
impl ListExperienceUseCase for StubListExperienceUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, ListExperienceError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetPortfolioStatsUseCase {
    result: Result<PortfolioStats, GetPortfolioStatsError>,
}

impl StubGetPortfolioStatsUseCase {
    pub fn success(stats: PortfolioStats) -> Self {
        Self { result: Ok(stats) }
    }

    pub fn error(err: GetPortfolioStatsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetPortfolioStatsUseCase for StubGetPortfolioStatsUseCase {
    async fn execute(&self) -> Result<PortfolioStats, GetPortfolioStatsError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSubmitContactMessageUseCase {
    result: Result<String, SubmitContactMessageError>,
    seen: Arc<Mutex<Option<SubmitContactMessageCommand>>>,
}

impl StubSubmitContactMessageUseCase {
    pub fn success(id: &str) -> Self {
        Self {
            result: Ok(id.to_string()),
            seen: Arc::new(Mutex::new(None)),
        }
    }

    pub fn error(err: SubmitContactMessageError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::new(Mutex::new(None)),
        }
    }

    /// Last command received, shared with clones of this stub.
    pub fn seen_command(&self) -> Arc<Mutex<Option<SubmitContactMessageCommand>>> {
        Arc::clone(&self.seen)
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for StubSubmitContactMessageUseCase {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<String, SubmitContactMessageError> {
        *self.seen.lock().unwrap() = Some(command);
        self.result.clone()
    }
}
