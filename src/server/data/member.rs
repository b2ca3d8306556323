//! Member data repository.
//!
//! Provides `MemberRepository` for registering members, looking them up by id or
//! business code, and moving them through the fulfilment stages.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::{
        fulfilment::FulfilmentStage,
        member::{CreateMemberParams, Member, PaymentStatus},
    },
    util::code,
};

use entity::member::Column;

pub struct MemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new member under review with a fresh UUID.
    ///
    /// The fee is taken from the tier and the fulfilment stage starts at `pending`.
    ///
    /// # Arguments
    /// - `params` - Validated registration values including the allocated member code
    ///
    /// # Returns
    /// - `Ok(Member)` - The created member
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the member code is already taken
    pub async fn create(&self, params: CreateMemberParams) -> Result<Member, AppError> {
        let entity = entity::member::ActiveModel {
            id: ActiveValue::Set(uuid::Uuid::new_v4().to_string()),
            member_code: ActiveValue::Set(params.member_code),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            branch: ActiveValue::Set(params.branch),
            membership_tier: ActiveValue::Set(params.tier.as_str().to_string()),
            fee: ActiveValue::Set(params.tier.fee()),
            proof_of_payment_url: ActiveValue::Set(params.proof_of_payment_url),
            payment_status: ActiveValue::Set(PaymentStatus::UnderReview.as_str().to_string()),
            card_url: ActiveValue::Set(None),
            fulfilment_stage: ActiveValue::Set(FulfilmentStage::Pending.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Member::from_entity(entity)
    }

    /// Gets every member, most recently joined first.
    pub async fn get_all(&self) -> Result<Vec<Member>, AppError> {
        entity::prelude::Member::find()
            .order_by_desc(Column::JoinedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        entity::prelude::Member::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Finds a member by business code such as `MBH-007`. Matching is exact.
    pub async fn find_by_code(&self, member_code: &str) -> Result<Option<Member>, AppError> {
        entity::prelude::Member::find()
            .filter(Column::MemberCode.eq(member_code))
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Highest numeric suffix among existing codes issued under `prefix`.
    ///
    /// Codes are compared numerically, so `MBH-1000` ranks above `MBH-999`. Codes
    /// whose suffix is not a number are ignored.
    ///
    /// # Returns
    /// - `Ok(Some(n))` - Highest number in use
    /// - `Ok(None)` - No code with this prefix exists
    pub async fn highest_code_number(&self, prefix: &str) -> Result<Option<i64>, DbErr> {
        let codes: Vec<String> = entity::prelude::Member::find()
            .select_only()
            .column(Column::MemberCode)
            .filter(Column::MemberCode.starts_with(format!("{}-", prefix)))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(codes
            .iter()
            .filter_map(|c| code::parse_member_number(prefix, c))
            .max())
    }

    /// Marks an under-review member as rejected.
    ///
    /// # Returns
    /// - `Ok(true)` - Member was under review and is now rejected
    /// - `Ok(false)` - Member was not under review; nothing changed
    pub async fn reject(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(
                Column::PaymentStatus,
                Expr::value(PaymentStatus::Rejected.as_str()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::PaymentStatus.eq(PaymentStatus::UnderReview.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Commits the accepted status, moving the member from `pending` to `status_committed`.
    ///
    /// Rejected members are never accepted by this update.
    ///
    /// # Returns
    /// - `Ok(true)` - The row moved to `status_committed`
    /// - `Ok(false)` - The row was not at `pending` or is rejected
    pub async fn commit_accepted(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(
                Column::PaymentStatus,
                Expr::value(PaymentStatus::Accepted.as_str()),
            )
            .col_expr(
                Column::FulfilmentStage,
                Expr::value(FulfilmentStage::StatusCommitted.as_str()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::FulfilmentStage.eq(FulfilmentStage::Pending.as_str()))
            .filter(Column::PaymentStatus.ne(PaymentStatus::Rejected.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Stores the card URL, moving the member from `status_committed` to `artifact_ready`.
    pub async fn attach_card(&self, id: &str, card_url: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(Column::CardUrl, Expr::value(card_url))
            .col_expr(
                Column::FulfilmentStage,
                Expr::value(FulfilmentStage::ArtifactReady.as_str()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::FulfilmentStage.eq(FulfilmentStage::StatusCommitted.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves a member from stage `from` to stage `to` if it is still at `from`.
    pub async fn advance_stage(
        &self,
        id: &str,
        from: FulfilmentStage,
        to: FulfilmentStage,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Member::update_many()
            .col_expr(Column::FulfilmentStage, Expr::value(to.as_str()))
            .filter(Column::Id.eq(id))
            .filter(Column::FulfilmentStage.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Accepted members whose fulfilment has not reached `notification_sent`.
    pub async fn get_incomplete_fulfilments(&self) -> Result<Vec<Member>, AppError> {
        entity::prelude::Member::find()
            .filter(Column::PaymentStatus.eq(PaymentStatus::Accepted.as_str()))
            .filter(Column::FulfilmentStage.ne(FulfilmentStage::NotificationSent.as_str()))
            .order_by_asc(Column::JoinedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }
}
