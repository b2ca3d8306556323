//! Member factory for creating test member entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let member = MemberFactory::new(&db)
///     .member_code("MBH-007")
///     .payment_status("Accepted")
///     .build()
///     .await?;
/// ```
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    member_code: String,
    full_name: String,
    email: String,
    branch: String,
    membership_tier: String,
    fee: i64,
    payment_status: String,
    card_url: Option<String>,
    fulfilment_stage: String,
    joined_at: DateTime<Utc>,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory with default values.
    ///
    /// Defaults:
    /// - member_code: `"TST-{n}"` where n is auto-incremented
    /// - membership_tier: `"Supporter"` with a fee of 5000 minor units
    /// - payment_status: `"UnderReview"`, fulfilment_stage: `"pending"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: uuid::Uuid::new_v4().to_string(),
            member_code: format!("TST-{:03}", id),
            full_name: format!("Member {}", id),
            email: format!("member{}@example.com", id),
            branch: "Mbabane".to_string(),
            membership_tier: "Supporter".to_string(),
            fee: 5000,
            payment_status: "UnderReview".to_string(),
            card_url: None,
            fulfilment_stage: "pending".to_string(),
            joined_at: Utc::now(),
        }
    }

    /// Sets the member code.
    pub fn member_code(mut self, member_code: impl Into<String>) -> Self {
        self.member_code = member_code.into();
        self
    }

    /// Sets the member's full name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the member's email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the membership tier and its fee in minor units.
    pub fn tier(mut self, membership_tier: impl Into<String>, fee: i64) -> Self {
        self.membership_tier = membership_tier.into();
        self.fee = fee;
        self
    }

    /// Sets the stored payment status string.
    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    /// Sets the stored card URL.
    pub fn card_url(mut self, card_url: Option<String>) -> Self {
        self.card_url = card_url;
        self
    }

    /// Sets the stored fulfilment stage string.
    pub fn fulfilment_stage(mut self, fulfilment_stage: impl Into<String>) -> Self {
        self.fulfilment_stage = fulfilment_stage.into();
        self
    }

    /// Sets the join timestamp.
    pub fn joined_at(mut self, joined_at: DateTime<Utc>) -> Self {
        self.joined_at = joined_at;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        entity::member::ActiveModel {
            id: ActiveValue::Set(self.id),
            member_code: ActiveValue::Set(self.member_code),
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set("76000000".to_string()),
            branch: ActiveValue::Set(self.branch),
            membership_tier: ActiveValue::Set(self.membership_tier),
            fee: ActiveValue::Set(self.fee),
            proof_of_payment_url: ActiveValue::Set(None),
            payment_status: ActiveValue::Set(self.payment_status),
            card_url: ActiveValue::Set(self.card_url),
            fulfilment_stage: ActiveValue::Set(self.fulfilment_stage),
            joined_at: ActiveValue::Set(self.joined_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an under-review member with default values.
///
/// Shorthand for `MemberFactory::new(db).build().await`.
pub async fn create_member(db: &DatabaseConnection) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db).build().await
}
