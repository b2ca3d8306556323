use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: String,
    pub member_code: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub branch: String,
    pub membership_tier: String,
    pub fee: Decimal,
    pub proof_of_payment_url: Option<String>,
    pub payment_status: String,
    pub card_url: Option<String>,
    pub fulfilment_stage: String,
    pub joined_at: DateTime<Utc>,
}

/// Response to a successful registration.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterMemberResponseDto {
    pub message: String,
    pub member: MemberDto,
    /// Gateway checkout URL the client should redirect to.
    pub redirect_url: String,
}

/// Multipart registration form, documented for OpenAPI only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct RegisterMemberForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub branch: Option<String>,
    /// One of `Supporter`, `Premium` or `VIP`, case-insensitive.
    pub membership_tier: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub proof_of_payment: Option<Vec<u8>>,
}

/// Response to an administrator status update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberStatusResponseDto {
    pub message: String,
    pub member: MemberDto,
}
