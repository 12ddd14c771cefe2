use actix_web::web;
use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::modules::experience::application::ports::incoming::use_cases::ListExperienceUseCase;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsUseCase, GetSingleProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::research::application::ports::incoming::use_cases::{
    GetResearchNoteUseCase, GetResearchNotesUseCase,
};
use crate::modules::research::application::research_use_cases::ResearchUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::ListSkillsUseCase;
use crate::modules::stats::application::domain::entities::PortfolioStats;
use crate::modules::stats::application::ports::incoming::use_cases::GetPortfolioStatsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every use case is a harmless stub unless
/// replaced with one of the `with_*` methods.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    research: ResearchUseCases,
    list_skills: Arc<dyn ListSkillsUseCase + Send + Sync>,
    list_experience: Arc<dyn ListExperienceUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    portfolio_stats: Arc<dyn GetPortfolioStatsUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(DefaultStubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase::not_found()),
            },
            research: ResearchUseCases {
                get_list: Arc::new(StubGetResearchNotesUseCase::success(vec![])),
                get_single: Arc::new(StubGetResearchNoteUseCase::not_found()),
            },
            list_skills: Arc::new(StubListSkillsUseCase::success(vec![])),
            list_experience: Arc::new(StubListExperienceUseCase::success(vec![])),
            submit_contact: Arc::new(StubSubmitContactMessageUseCase::success("stub-id")),
            portfolio_stats: Arc::new(StubGetPortfolioStatsUseCase::success(
                PortfolioStats::default(),
            )),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_research_notes(
        mut self,
        uc: impl GetResearchNotesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.research.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_research_note(
        mut self,
        uc: impl GetResearchNoteUseCase + Send + Sync + 'static,
    ) -> Self {
        self.research.get_single = Arc::new(uc);
        self
    }

    pub fn with_list_skills(mut self, uc: impl ListSkillsUseCase + Send + Sync + 'static) -> Self {
        self.list_skills = Arc::new(uc);
        self
    }

    pub fn with_list_experience(
        mut self,
        uc: impl ListExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_experience = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_portfolio_stats(
        mut self,
        uc: impl GetPortfolioStatsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.portfolio_stats = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            research: self.research,
            list_skills: self.list_skills,
            list_experience: self.list_experience,
            submit_contact: self.submit_contact,
            portfolio_stats: self.portfolio_stats,
        })
    }
}
