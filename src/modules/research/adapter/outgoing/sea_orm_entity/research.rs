use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::research::application::domain::entities::ResearchNote;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "research")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "Text")]
    pub summary: String,

    pub category: String,

    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,

    pub date_published: DateTimeWithTimeZone,

    pub featured: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Result<ResearchNote, serde_json::Error> {
        Ok(ResearchNote {
            id: self.id.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone(),
            category: self.category.clone(),
            tags: serde_json::from_value(self.tags.clone())?,
            date_published: self.date_published.into(),
            featured: self.featured,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        })
    }
}

impl From<ResearchNote> for ActiveModel {
    fn from(note: ResearchNote) -> Self {
        ActiveModel {
            id: Set(note.id),
            title: Set(note.title),
            content: Set(note.content),
            summary: Set(note.summary),
            category: Set(note.category),
            tags: Set(serde_json::json!(note.tags)),
            date_published: Set(note.date_published.fixed_offset()),
            featured: Set(note.featured),
            created_at: Set(note.created_at.fixed_offset()),
            updated_at: Set(note.updated_at.fixed_offset()),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
