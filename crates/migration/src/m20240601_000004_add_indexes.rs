use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Signups: lookups by owning camper
        manager
            .create_index(
                Index::create()
                    .name("idx_signups_camper")
                    .table(Signups::Table)
                    .col(Signups::CamperId)
                    .to_owned(),
            )
            .await?;

        // Signups: lookups by owning activity
        manager
            .create_index(
                Index::create()
                    .name("idx_signups_activity")
                    .table(Signups::Table)
                    .col(Signups::ActivityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_signups_camper").table(Signups::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_signups_activity").table(Signups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Signups { Table, CamperId, ActivityId }
