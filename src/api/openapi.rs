use crate::api::schemas::{ErrorResponse, WelcomeResponse};
use utoipa::OpenApi;

use crate::modules::contact::adapter::incoming::web::routes::submit_contact::{
    SubmitContactRequest, SubmitContactResponse,
};
use crate::modules::experience::adapter::incoming::web::routes::get_experience::ExperienceListResponse;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::project::adapter::incoming::web::routes::get_projects::ProjectListResponse;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::research::adapter::incoming::web::routes::get_research_notes::ResearchListResponse;
use crate::modules::research::application::domain::entities::ResearchNote;
use crate::modules::skill::adapter::incoming::web::routes::get_skills::SkillListResponse;
use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::stats::application::domain::entities::PortfolioStats;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content plus a contact form endpoint"
    ),
    paths(
        crate::health::root,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project::get_single_project_handler,

        // Research endpoints
        crate::modules::research::adapter::incoming::web::routes::get_research_notes::get_research_notes_handler,
        crate::modules::research::adapter::incoming::web::routes::get_research_note::get_research_note_handler,

        crate::modules::skill::adapter::incoming::web::routes::get_skills::get_skills_handler,
        crate::modules::experience::adapter::incoming::web::routes::get_experience::get_experience_handler,
        crate::modules::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
        crate::modules::stats::adapter::incoming::web::routes::get_portfolio_stats::get_portfolio_stats_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            WelcomeResponse,

            Project,
            ProjectListResponse,
            ResearchNote,
            ResearchListResponse,
            Skill,
            SkillListResponse,
            Experience,
            ExperienceListResponse,
            SubmitContactRequest,
            SubmitContactResponse,
            PortfolioStats,
        )
    ),
    tags(
        (name = "root", description = "Service greeting"),
        (name = "projects", description = "Portfolio projects"),
        (name = "research", description = "Research notes"),
        (name = "skills", description = "Skills and proficiency levels"),
        (name = "experience", description = "Work experience"),
        (name = "contact", description = "Contact form submissions"),
        (name = "stats", description = "Portfolio counts"),
    )
)]
pub struct ApiDoc;
