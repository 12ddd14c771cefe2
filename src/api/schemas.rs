// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every failing route
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Project not found")]
    pub detail: String,

    /// Error code for programmatic handling
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,
}

#[derive(Serialize, ToSchema)]
pub struct WelcomeResponse {
    #[schema(example = "Welcome to кяуρтιк's Portfolio API")]
    pub message: String,
}
