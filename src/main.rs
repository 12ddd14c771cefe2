pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{contact, experience, project, research, seed, skill, stats};

use crate::config::AppConfig;
use crate::contact::adapter::outgoing::ContactRepositoryPostgres;
use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::contact::application::service::SubmitContactMessageService;
use crate::experience::adapter::outgoing::ExperienceQueryPostgres;
use crate::experience::application::ports::incoming::use_cases::ListExperienceUseCase;
use crate::experience::application::service::ListExperienceService;
use crate::project::adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::service::{GetProjectsService, GetSingleProjectService};
use crate::research::adapter::outgoing::{ResearchQueryPostgres, ResearchRepositoryPostgres};
use crate::research::application::research_use_cases::ResearchUseCases;
use crate::research::application::service::{GetResearchNoteService, GetResearchNotesService};
use crate::seed::SeedService;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::skill::adapter::outgoing::{SkillQueryPostgres, SkillRepositoryPostgres};
use crate::skill::application::ports::incoming::use_cases::ListSkillsUseCase;
use crate::skill::application::service::ListSkillsService;
use crate::stats::adapter::outgoing::PortfolioStatsPostgres;
use crate::stats::application::ports::incoming::use_cases::GetPortfolioStatsUseCase;
use crate::stats::application::service::GetPortfolioStatsService;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub research: ResearchUseCases,
    pub list_skills: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub list_experience: Arc<dyn ListExperienceUseCase + Send + Sync>,
    pub submit_contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub portfolio_stats: Arc<dyn GetPortfolioStatsUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Seed empty collections before accepting traffic
    let seed_service = SeedService::new(
        Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
        Arc::new(ResearchRepositoryPostgres::new(Arc::clone(&db_arc))),
        Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc))),
    );
    let report = seed_service.run().await.context("Seeding failed")?;
    info!(
        "Seed step done: projects={}, research={}, skills={}",
        report.projects, report.research, report.skills
    );

    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let research_query = ResearchQueryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query)),
        },
        research: ResearchUseCases {
            get_list: Arc::new(GetResearchNotesService::new(research_query.clone())),
            get_single: Arc::new(GetResearchNoteService::new(research_query)),
        },
        list_skills: Arc::new(ListSkillsService::new(SkillQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        list_experience: Arc::new(ListExperienceService::new(ExperienceQueryPostgres::new(
            Arc::clone(&db_arc),
        ))),
        submit_contact: Arc::new(SubmitContactMessageService::new(Arc::new(
            ContactRepositoryPostgres::new(Arc::clone(&db_arc)),
        ))),
        portfolio_stats: Arc::new(GetPortfolioStatsService::new(PortfolioStatsPostgres::new(
            Arc::clone(&db_arc),
        ))),
    };

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db_arc);
    let openapi = api::openapi::ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Root + health
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    // Research
    cfg.service(crate::research::adapter::incoming::web::routes::get_research_notes_handler);
    cfg.service(crate::research::adapter::incoming::web::routes::get_research_note_handler);
    // Skills, experience, contact, stats
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::experience::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
    cfg.service(crate::stats::adapter::incoming::web::routes::get_portfolio_stats_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
