use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactMessageCommand, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactRepository;

#[derive(Clone)]
pub struct SubmitContactMessageService {
    repository: Arc<dyn ContactRepository>,
}

impl SubmitContactMessageService {
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SubmitContactMessageUseCase for SubmitContactMessageService {
    async fn execute(
        &self,
        command: SubmitContactMessageCommand,
    ) -> Result<String, SubmitContactMessageError> {
        let message = ContactMessage::new(command.name, command.email, command.message);
        let id = message.id.clone();

        self.repository.insert(message).await?;

        info!("Stored contact message id={}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::function;

    use crate::modules::contact::application::ports::outgoing::contact_repository::{
        ContactRepositoryError, MockContactRepository,
    };

    fn command() -> SubmitContactMessageCommand {
        SubmitContactMessageCommand {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Loved the Synthora demo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_stores_unreplied_message() {
        let before = Utc::now();
        let mut repo = MockContactRepository::new();
        repo.expect_insert()
            .with(function(move |m: &ContactMessage| {
                !m.replied
                    && m.created_at >= before
                    && m.name == "Ada"
                    && m.message == "Loved the Synthora demo"
            }))
            .times(1)
            .returning(|_| Ok(()));

        let service = SubmitContactMessageService::new(Arc::new(repo));
        let id = service.execute(command()).await.unwrap();

        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_submit_returns_stored_id() {
        let stored_id = Arc::new(std::sync::Mutex::new(String::new()));
        let captured = Arc::clone(&stored_id);

        let mut repo = MockContactRepository::new();
        repo.expect_insert().times(1).returning(move |m| {
            *captured.lock().unwrap() = m.id;
            Ok(())
        });

        let service = SubmitContactMessageService::new(Arc::new(repo));
        let id = service.execute(command()).await.unwrap();

        assert_eq!(*stored_id.lock().unwrap(), id);
    }

    #[tokio::test]
    async fn test_submit_repository_error() {
        let mut repo = MockContactRepository::new();
        repo.expect_insert()
            .returning(|_| Err(ContactRepositoryError::DatabaseError("db down".to_string())));

        let service = SubmitContactMessageService::new(Arc::new(repo));
        let result = service.execute(command()).await;

        assert!(matches!(
            result,
            Err(SubmitContactMessageError::RepositoryError(_))
        ));
    }
}
