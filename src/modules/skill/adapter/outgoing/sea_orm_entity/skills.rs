use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::skill::application::domain::entities::Skill;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub category: String,
    pub level: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub icon: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl From<Model> for Skill {
    fn from(model: Model) -> Self {
        Skill {
            id: model.id,
            name: model.name,
            category: model.category,
            level: model.level,
            icon: model.icon,
            description: model.description,
        }
    }
}

impl From<Skill> for ActiveModel {
    fn from(skill: Skill) -> Self {
        ActiveModel {
            id: Set(skill.id),
            name: Set(skill.name),
            category: Set(skill.category),
            level: Set(skill.level),
            icon: Set(skill.icon),
            description: Set(skill.description),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
