use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a showcased project.
///
/// Stored as free text. Values outside the known set are kept verbatim in
/// `Other` so they survive a read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    Active,
    Discontinued,
    ComingSoon,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Discontinued => "discontinued",
            ProjectStatus::ComingSoon => "coming_soon",
            ProjectStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => ProjectStatus::Active,
            "discontinued" => ProjectStatus::Discontinued,
            "coming_soon" => ProjectStatus::ComingSoon,
            _ => ProjectStatus::Other(raw),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Slug or generated identifier
    #[schema(example = "synthora")]
    pub id: String,
    #[schema(example = "Synthora")]
    pub title: String,
    pub description: String,
    pub long_description: String,
    #[schema(example = json!(["Python", "Flask"]))]
    pub technologies: Vec<String>,
    /// One of `active`, `discontinued`, `coming_soon`
    #[schema(value_type = String, example = "active")]
    pub status: ProjectStatus,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub image_url: Option<String>,
    #[schema(example = "AI/ML")]
    pub category: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
