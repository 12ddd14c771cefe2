// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Equality filter; `None` fields are not constrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListFilter {
    pub featured: Option<bool>,
    pub category: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, project_id: &str) -> Result<Project, ProjectQueryError>;

    /// Every matching project, newest `created_at` first.
    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError>;
}
