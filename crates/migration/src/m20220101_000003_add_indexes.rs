use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Meetup: filter by event
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_meetup_event")
                    .table(Meetup::Table)
                    .col(Meetup::Event)
                    .to_owned(),
            )
            .await?;

        // Meetup: lookups by registrant
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_meetup_registration")
                    .table(Meetup::Table)
                    .col(Meetup::RegistrationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_meetup_registration").table(Meetup::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_meetup_event").table(Meetup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Meetup { Table, Event, RegistrationId }
