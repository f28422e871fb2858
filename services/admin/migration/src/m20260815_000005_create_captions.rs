use sea_orm_migration::prelude::*;

use crate::m20260815_000001_create_profiles::Profiles;
use crate::m20260815_000004_create_images::Images;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Captions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Captions::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Captions::ImageId).uuid().not_null())
                    .col(ColumnDef::new(Captions::ProfileId).uuid().not_null())
                    .col(ColumnDef::new(Captions::Body).text().not_null())
                    .col(
                        ColumnDef::new(Captions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Captions::Table, Captions::ImageId)
                            .to(Images::Table, Images::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Captions::Table, Captions::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Captions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum Captions {
    Table,
    Id,
    ImageId,
    ProfileId,
    Body,
    CreatedAt,
}
