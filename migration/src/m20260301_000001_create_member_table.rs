use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(string(Member::Id).primary_key())
                    .col(string_uniq(Member::MemberCode))
                    .col(string(Member::FullName))
                    .col(string(Member::Email))
                    .col(string(Member::PhoneNumber).default(""))
                    .col(string(Member::Branch).default(""))
                    .col(string(Member::MembershipTier))
                    .col(big_integer(Member::Fee))
                    .col(string_null(Member::ProofOfPaymentUrl))
                    .col(string(Member::PaymentStatus).default("UnderReview"))
                    .col(string_null(Member::CardUrl))
                    .col(string(Member::FulfilmentStage).default("pending"))
                    .col(
                        timestamp(Member::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    MemberCode,
    FullName,
    Email,
    PhoneNumber,
    Branch,
    MembershipTier,
    Fee,
    ProofOfPaymentUrl,
    PaymentStatus,
    CardUrl,
    FulfilmentStage,
    JoinedAt,
}
