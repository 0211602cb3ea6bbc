//! Create `signups` table.
//!
//! Join rows between campers and activities. Both foreign keys cascade on
//! delete and `time` is restricted to an hour of the day.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Signups::Table)
                    .if_not_exists()
                    .col(pk_auto(Signups::Id))
                    .col(
                        integer_null(Signups::Time)
                            .check(Expr::col(Signups::Time).gte(0).and(Expr::col(Signups::Time).lte(23))),
                    )
                    .col(integer(Signups::CamperId))
                    .col(integer(Signups::ActivityId))
                    .col(timestamp_with_time_zone(Signups::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Signups::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_camper_id_campers")
                            .from(Signups::Table, Signups::CamperId)
                            .to(Campers::Table, Campers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_signups_activity_id_activities")
                            .from(Signups::Table, Signups::ActivityId)
                            .to(Activities::Table, Activities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Signups::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Signups { Table, Id, Time, CamperId, ActivityId, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Campers { Table, Id }

#[derive(DeriveIden)]
enum Activities { Table, Id }
