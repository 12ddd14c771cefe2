use async_trait::async_trait;

use crate::modules::project::application::domain::entities::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write-side port. Only startup seeding writes projects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn count(&self) -> Result<u64, ProjectRepositoryError>;

    /// Returns the number of inserted rows.
    async fn insert_many(&self, projects: Vec<Project>) -> Result<u64, ProjectRepositoryError>;
}
