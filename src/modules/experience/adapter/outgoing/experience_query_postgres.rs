use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::experience::{Column, Entity};
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};

#[derive(Clone)]
pub struct ExperienceQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceQuery for ExperienceQueryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceQueryError> {
        let models = Entity::find()
            .order_by_desc(Column::Current)
            .order_by_asc(Column::Position)
            .all(&*self.db)
            .await
            .map_err(|e| ExperienceQueryError::DatabaseError(e.to_string()))?;

        models
            .into_iter()
            .map(|m| {
                m.to_domain()
                    .map_err(|e| ExperienceQueryError::SerializationError(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::modules::experience::adapter::outgoing::sea_orm_entity::experience::Model;

    fn experience_model(id: &str, position: i64, current: bool) -> Model {
        Model {
            id: id.to_string(),
            position,
            title: "Developer".to_string(),
            company: "Acme".to_string(),
            duration: "2023 - Present".to_string(),
            description: "Building things".to_string(),
            technologies: serde_json::json!(["Python", "React"]),
            current,
        }
    }

    #[tokio::test]
    async fn test_list_orders_current_first_then_position() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![
                    experience_model("now", 2, true),
                    experience_model("before", 1, false),
                ]])
                .into_connection(),
        );

        let query = ExperienceQueryPostgres::new(Arc::clone(&db));
        let entries = query.list().await.unwrap();

        assert_eq!(entries[0].id, "now");
        assert_eq!(entries[1].technologies, vec!["Python", "React"]);

        drop(query);
        let Ok(db) = Arc::try_unwrap(db) else {
            panic!("connection still shared");
        };
        let log = db.into_transaction_log();
        let sql = log[0].statements()[0].sql.clone();

        assert!(sql.ends_with(
            r#"ORDER BY "experience"."current" DESC, "experience"."position" ASC"#
        ));
    }

    #[tokio::test]
    async fn test_list_corrupt_technologies() {
        let mut model = experience_model("bad", 1, false);
        model.technologies = serde_json::json!({"not": "a list"});

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ExperienceQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list().await,
            Err(ExperienceQueryError::SerializationError(_))
        ));
    }
}
