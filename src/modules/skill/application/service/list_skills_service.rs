use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::Skill;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillsError, ListSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_query::SkillQuery;

pub struct ListSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> ListSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSkillsUseCase for ListSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, category: Option<String>) -> Result<Vec<Skill>, ListSkillsError> {
        Ok(self.query.list(category).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::modules::skill::application::ports::outgoing::skill_query::SkillQueryError;

    struct MockSkillQuery {
        result: Result<Vec<Skill>, SkillQueryError>,
        seen_category: Arc<Mutex<Option<Option<String>>>>,
    }

    #[async_trait]
    impl SkillQuery for MockSkillQuery {
        async fn list(&self, category: Option<String>) -> Result<Vec<Skill>, SkillQueryError> {
            *self.seen_category.lock().unwrap() = Some(category);
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn test_list_skills_passes_category() {
        let seen = Arc::new(Mutex::new(None));
        let service = ListSkillsService::new(MockSkillQuery {
            result: Ok(vec![Skill::new("Python", "Development", 80).unwrap()]),
            seen_category: Arc::clone(&seen),
        });

        let skills = service
            .execute(Some("Development".to_string()))
            .await
            .unwrap();

        assert_eq!(skills.len(), 1);
        assert_eq!(
            seen.lock().unwrap().clone(),
            Some(Some("Development".to_string()))
        );
    }

    #[tokio::test]
    async fn test_list_skills_database_error() {
        let service = ListSkillsService::new(MockSkillQuery {
            result: Err(SkillQueryError::DatabaseError("db down".to_string())),
            seen_category: Arc::new(Mutex::new(None)),
        });

        let result = service.execute(None).await;

        assert!(matches!(result, Err(ListSkillsError::QueryFailed(_))));
    }
}
