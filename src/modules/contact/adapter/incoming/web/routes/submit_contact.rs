use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitContactResponse {
    #[schema(example = "Message sent successfully")]
    pub message: String,
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 200, description = "Message stored", body = SubmitContactResponse),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    payload: web::Json<SubmitContactRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let SubmitContactRequest {
        name,
        email,
        message,
    } = payload.into_inner();

    let command = SubmitContactMessageCommand {
        name,
        email,
        message,
    };

    match data.submit_contact.execute(command).await {
        Ok(id) => ApiResponse::success(SubmitContactResponse {
            message: "Message sent successfully".to_string(),
            id,
        }),
        Err(e) => {
            error!("Failed to store contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}
