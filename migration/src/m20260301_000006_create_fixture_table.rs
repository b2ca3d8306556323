use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fixture::Table)
                    .if_not_exists()
                    .col(pk_auto(Fixture::Id))
                    .col(date(Fixture::Date))
                    .col(time(Fixture::Time))
                    .col(string(Fixture::HomeTeam))
                    .col(string(Fixture::AwayTeam))
                    .col(string_null(Fixture::Stadium))
                    .col(
                        timestamp(Fixture::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fixture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fixture {
    Table,
    Id,
    Date,
    Time,
    HomeTeam,
    AwayTeam,
    Stadium,
    CreatedAt,
}
