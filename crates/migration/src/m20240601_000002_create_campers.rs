//! Create `campers` table.
//!
//! Age bounds live in the model validators; the column only requires a value.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Campers::Table)
                    .if_not_exists()
                    .col(pk_auto(Campers::Id))
                    .col(string(Campers::Name))
                    .col(integer(Campers::Age))
                    .col(timestamp_with_time_zone(Campers::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Campers::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Campers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Campers { Table, Id, Name, Age, CreatedAt, UpdatedAt }
