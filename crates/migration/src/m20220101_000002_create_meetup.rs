//! Create `meetup` table with an optional FK to `registration`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Meetup::Table)
                    .if_not_exists()
                    .col(integer(Meetup::Id).primary_key().auto_increment())
                    .col(string_len(Meetup::Event, 255).not_null())
                    .col(
                        ColumnDef::new(Meetup::MeetupDate)
                            .string_len(32)
                            .null(),
                    )
                    .col(boolean(Meetup::Registered).not_null().default(false))
                    .col(
                        ColumnDef::new(Meetup::RegistrationId)
                            .integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meetup_registration")
                            .from(Meetup::Table, Meetup::RegistrationId)
                            .to(Registration::Table, Registration::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Meetup::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Meetup { Table, Id, Event, MeetupDate, Registered, RegistrationId }

#[derive(DeriveIden)]
enum Registration { Table, Id }
