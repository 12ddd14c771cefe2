use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Research::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Research::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Research::Title).text().not_null())
                    .col(ColumnDef::new(Research::Content).text().not_null())
                    .col(ColumnDef::new(Research::Summary).text().not_null())
                    .col(ColumnDef::new(Research::Category).text().not_null())
                    .col(ColumnDef::new(Research::Tags).json_binary().not_null())
                    .col(
                        ColumnDef::new(Research::DatePublished)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Research::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Research::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Research::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_research_date_published
                ON research (date_published DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_research_date_published;")
            .await?;

        manager
            .drop_table(Table::drop().table(Research::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Research {
    Table,
    Id,
    Title,
    Content,
    Summary,
    Category,
    Tags,
    DatePublished,
    Featured,
    CreatedAt,
    UpdatedAt,
}
