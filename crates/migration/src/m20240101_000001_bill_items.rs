//! Bill table.
//!
//! `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
//! again, so bill ids are never reused.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BillItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BillItems::Description).string().not_null())
                    .col(ColumnDef::new(BillItems::Amount).big_integer().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BillItems {
    Table,
    Id,
    Description,
    Amount,
}
