pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_table_projects;
mod m20250801_000002_create_table_research;
mod m20250801_000003_create_table_skills;
mod m20250801_000004_create_table_experience;
mod m20250801_000005_create_table_contact;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_table_projects::Migration),
            Box::new(m20250801_000002_create_table_research::Migration),
            Box::new(m20250801_000003_create_table_skills::Migration),
            Box::new(m20250801_000004_create_table_experience::Migration),
            Box::new(m20250801_000005_create_table_contact::Migration),
        ]
    }
}
