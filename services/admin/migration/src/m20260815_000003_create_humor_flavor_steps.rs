use sea_orm_migration::prelude::*;

use crate::m20260815_000002_create_humor_flavors::HumorFlavors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HumorFlavorSteps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HumorFlavorSteps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HumorFlavorSteps::FlavorId).uuid().not_null())
                    .col(
                        ColumnDef::new(HumorFlavorSteps::StepNumber)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HumorFlavorSteps::Instruction)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HumorFlavorSteps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(HumorFlavorSteps::Table, HumorFlavorSteps::FlavorId)
                            .to(HumorFlavors::Table, HumorFlavors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One step number per flavor; the sequence invariant lives here, not
        // in application code.
        manager
            .create_index(
                Index::create()
                    .name("idx_humor_flavor_steps_flavor_id_step_number")
                    .table(HumorFlavorSteps::Table)
                    .col(HumorFlavorSteps::FlavorId)
                    .col(HumorFlavorSteps::StepNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HumorFlavorSteps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum HumorFlavorSteps {
    Table,
    Id,
    FlavorId,
    StepNumber,
    Instruction,
    CreatedAt,
}
