use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Collection counts, computed on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioStats {
    pub total_projects: u64,
    /// Projects whose status is `active`
    pub active_projects: u64,
    pub total_research: u64,
    pub total_skills: u64,
}
