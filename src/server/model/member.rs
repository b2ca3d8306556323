//! Member domain models and registration parameters.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::member::MemberDto,
    server::{
        error::{internal::InternalError, AppError},
        model::{fulfilment::FulfilmentStage, upload::UploadedFile},
        util::money,
    },
};

/// Membership tier chosen at registration. Each tier carries a fixed fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MembershipTier {
    Supporter,
    Premium,
    Vip,
}

impl MembershipTier {
    /// Parses a tier name, ignoring case and surrounding whitespace.
    ///
    /// # Returns
    /// - `Some(MembershipTier)` - `supporter`, `premium` or `vip` in any casing
    /// - `None` - Any other value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "supporter" => Some(Self::Supporter),
            "premium" => Some(Self::Premium),
            "vip" => Some(Self::Vip),
            _ => None,
        }
    }

    /// Membership fee in minor currency units.
    pub fn fee(self) -> i64 {
        match self {
            Self::Supporter => 5_000,
            Self::Premium => 10_000,
            Self::Vip => 15_000,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supporter => "Supporter",
            Self::Premium => "Premium",
            Self::Vip => "VIP",
        }
    }

    fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::parse(value).ok_or_else(|| InternalError::UnknownStoredValue {
            column: "membership_tier",
            value: value.to_string(),
        })
    }
}

impl fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review state of a member's payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    UnderReview,
    Accepted,
    Rejected,
}

impl PaymentStatus {
    /// Parses a status name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "underreview" => Some(Self::UnderReview),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnderReview => "UnderReview",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether a member in this status may be moved to `next`.
    ///
    /// Members under review may be accepted or rejected. Re-applying the current
    /// status is always allowed so an interrupted fulfilment can be resumed.
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        self == next || (self == Self::UnderReview && next != Self::UnderReview)
    }

    fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::parse(value).ok_or_else(|| InternalError::UnknownStoredValue {
            column: "payment_status",
            value: value.to_string(),
        })
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered club member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// UUIDv4 string identifier.
    pub id: String,
    /// Business code such as `MBH-007`.
    pub member_code: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub branch: String,
    pub tier: MembershipTier,
    /// Fee charged at registration, in minor units.
    pub fee: i64,
    pub proof_of_payment_url: Option<String>,
    pub payment_status: PaymentStatus,
    /// Public URL of the rendered membership card, set once the member is accepted.
    pub card_url: Option<String>,
    pub fulfilment_stage: FulfilmentStage,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The member entity from the database
    ///
    /// # Returns
    /// - `Ok(Member)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr)` - A stored tier, status or stage is unknown
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, AppError> {
        Ok(Self {
            tier: MembershipTier::from_stored(&entity.membership_tier)?,
            payment_status: PaymentStatus::from_stored(&entity.payment_status)?,
            fulfilment_stage: FulfilmentStage::from_stored(&entity.fulfilment_stage)?,
            id: entity.id,
            member_code: entity.member_code,
            full_name: entity.full_name,
            email: entity.email,
            phone_number: entity.phone_number,
            branch: entity.branch,
            fee: entity.fee,
            proof_of_payment_url: entity.proof_of_payment_url,
            card_url: entity.card_url,
            joined_at: entity.joined_at,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            member_code: self.member_code,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            branch: self.branch,
            membership_tier: self.tier.as_str().to_string(),
            fee: money::to_decimal(self.fee),
            proof_of_payment_url: self.proof_of_payment_url,
            payment_status: self.payment_status.as_str().to_string(),
            card_url: self.card_url,
            fulfilment_stage: self.fulfilment_stage.as_str().to_string(),
            joined_at: self.joined_at,
        }
    }
}

/// Raw registration form as received over multipart.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub branch: Option<String>,
    pub membership_tier: Option<String>,
    pub proof_of_payment: Option<UploadedFile>,
}

/// Validated values for inserting a member row.
#[derive(Debug, Clone)]
pub struct CreateMemberParams {
    pub member_code: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub branch: String,
    pub tier: MembershipTier,
    pub proof_of_payment_url: Option<String>,
}

/// Member together with the checkout URL issued at registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub member: Member,
    pub redirect_url: String,
}
