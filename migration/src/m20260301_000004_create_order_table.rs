use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(string_uniq(Orders::OrderCode))
                    .col(string(Orders::CustomerFullName))
                    .col(string(Orders::CustomerEmail))
                    .col(string_null(Orders::CustomerPhone))
                    .col(string(Orders::ShippingAddress))
                    .col(string(Orders::Status).default("Pending"))
                    .col(big_integer(Orders::TotalAmount))
                    .col(string(Orders::FulfilmentStage).default("pending"))
                    .col(
                        timestamp(Orders::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    OrderCode,
    CustomerFullName,
    CustomerEmail,
    CustomerPhone,
    ShippingAddress,
    Status,
    TotalAmount,
    FulfilmentStage,
    CreatedAt,
}
