use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string(Contact::FullName))
                    .col(string(Contact::Email))
                    .col(string(Contact::PhoneNumber))
                    .col(string(Contact::InquiryType))
                    .col(string(Contact::Subject))
                    .col(text(Contact::Message))
                    .col(boolean(Contact::IsResolved).default(false))
                    .col(
                        timestamp(Contact::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    FullName,
    Email,
    PhoneNumber,
    InquiryType,
    Subject,
    Message,
    IsResolved,
    CreatedAt,
}
