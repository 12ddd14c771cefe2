use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResearchNote {
    #[schema(example = "jarvis-email-capability")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    #[schema(example = "J.A.R.V.I.S.")]
    pub category: String,
    #[schema(example = json!(["AI", "Automation"]))]
    pub tags: Vec<String>,
    pub date_published: DateTime<Utc>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
