use sea_orm_migration::prelude::*;

use crate::m20260815_000001_create_profiles::Profiles;
use crate::m20260815_000005_create_captions::Captions;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CaptionVotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CaptionVotes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CaptionVotes::CaptionId).uuid().not_null())
                    .col(ColumnDef::new(CaptionVotes::ProfileId).uuid().not_null())
                    .col(
                        ColumnDef::new(CaptionVotes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaptionVotes::Table, CaptionVotes::CaptionId)
                            .to(Captions::Table, Captions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CaptionVotes::Table, CaptionVotes::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per profile per caption.
        manager
            .create_index(
                Index::create()
                    .name("idx_caption_votes_caption_id_profile_id")
                    .table(CaptionVotes::Table)
                    .col(CaptionVotes::CaptionId)
                    .col(CaptionVotes::ProfileId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CaptionVotes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CaptionVotes {
    Table,
    Id,
    CaptionId,
    ProfileId,
    CreatedAt,
}
