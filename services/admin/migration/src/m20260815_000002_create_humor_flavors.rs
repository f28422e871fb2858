use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HumorFlavors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HumorFlavors::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HumorFlavors::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(HumorFlavors::Description).text().not_null())
                    .col(
                        ColumnDef::new(HumorFlavors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HumorFlavors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum HumorFlavors {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
