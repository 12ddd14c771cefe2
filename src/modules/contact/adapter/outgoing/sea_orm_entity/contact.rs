use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::modules::contact::application::domain::entities::ContactMessage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Text")]
    pub id: String,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
    pub replied: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<ContactMessage> for ActiveModel {
    fn from(msg: ContactMessage) -> Self {
        ActiveModel {
            id: Set(msg.id),
            name: Set(msg.name),
            email: Set(msg.email),
            message: Set(msg.message),
            created_at: Set(msg.created_at.fixed_offset()),
            replied: Set(msg.replied),
        }
    }
}
