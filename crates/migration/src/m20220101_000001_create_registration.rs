//! Create `registration` table.
//! Registrants are looked up by their external `registration` attribute, which is unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(integer(Registration::Id).primary_key().auto_increment())
                    .col(string_len(Registration::Name, 255).not_null())
                    .col(string_len(Registration::Registration, 64).not_null().unique_key())
                    .col(
                        ColumnDef::new(Registration::DateOfRegistration)
                            .string_len(32)
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Registration::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Registration {
    Table,
    Id,
    Name,
    Registration,
    DateOfRegistration,
}
