use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::contact_repository::ContactRepositoryError;

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitContactMessageCommand {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactMessageError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactRepositoryError> for SubmitContactMessageError {
    fn from(err: ContactRepositoryError) -> Self {
        SubmitContactMessageError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    /// Stores the message and returns its id.
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<String, SubmitContactMessageError>;
}
