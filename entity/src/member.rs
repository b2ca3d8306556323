use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub member_code: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub branch: String,
    pub membership_tier: String,
    /// Membership fee in minor currency units.
    pub fee: i64,
    pub proof_of_payment_url: Option<String>,
    pub payment_status: String,
    pub card_url: Option<String>,
    pub fulfilment_stage: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
