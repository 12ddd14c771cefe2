use sea_orm::entity::prelude::*;

use crate::modules::experience::application::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    // Serial assigned by the database on insert
    pub position: i64,

    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub company: String,
    #[sea_orm(column_type = "Text")]
    pub duration: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    pub current: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_domain(self) -> Result<Experience, serde_json::Error> {
        Ok(Experience {
            id: self.id,
            title: self.title,
            company: self.company,
            duration: self.duration,
            description: self.description,
            technologies: serde_json::from_value(self.technologies)?,
            current: self.current,
        })
    }
}
