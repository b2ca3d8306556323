use crate::server::{
    card::CardDetails,
    data::member::MemberRepository,
    error::{internal::InternalError, AppError},
    model::{
        fulfilment::FulfilmentStage,
        member::{Member, PaymentStatus},
        payment::{PaymentNotification, PaymentSubject, ReconcileOutcome},
    },
    provider::{asset::AssetKind, email::EmailMessage},
};

use super::{member_key, ReconciliationService, MAX_STAGE_STEPS};

const CARD_CONTENT_TYPE: &str = "image/png";

impl<'a> ReconciliationService<'a> {
    pub(super) async fn member_notification(
        &self,
        member_code: &str,
        notification: &PaymentNotification,
    ) -> Result<ReconcileOutcome, AppError> {
        let repo = MemberRepository::new(&self.state.db);
        let member = repo
            .find_by_code(member_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(PaymentSubject::Member.not_found_message().to_string())
            })?;

        let key = member_key(&member.member_code);
        if let Some(outcome) = self.screen(&key, notification).await? {
            return Ok(outcome);
        }

        self.resume_member(&member.id).await
    }

    /// Accepts a member and runs their fulfilment to completion.
    ///
    /// Used by the admin status update. An already accepted member resumes from the
    /// stage they reached.
    ///
    /// # Returns
    /// - `Ok(Member)` - The member after fulfilment
    /// - `Err(AppError::NotFound)` - No member with this id
    /// - `Err(AppError::BadRequest)` - The member was rejected
    pub async fn accept_member(&self, member_id: &str) -> Result<Member, AppError> {
        match self.resume_member(member_id).await? {
            ReconcileOutcome::Refused => Err(AppError::BadRequest(
                "Invalid status transition from Rejected to Accepted.".to_string(),
            )),
            _ => self.reload_member(member_id).await,
        }
    }

    /// Runs the member's remaining fulfilment stages while holding their lock.
    pub(super) async fn resume_member(
        &self,
        member_id: &str,
    ) -> Result<ReconcileOutcome, AppError> {
        let member = self.reload_member(member_id).await?;
        let _guard = self.state.locks.acquire(&member_key(&member.member_code)).await;

        // Another run may have advanced the member while this one waited for the lock.
        let member = self.reload_member(member_id).await?;
        if member.payment_status == PaymentStatus::Rejected {
            tracing::warn!(
                "Refusing payment for rejected member {}",
                member.member_code
            );
            return Ok(ReconcileOutcome::Refused);
        }
        if member.fulfilment_stage.is_complete() {
            return Ok(ReconcileOutcome::AlreadyFulfilled);
        }

        self.drive_member(member).await
    }

    async fn drive_member(&self, mut member: Member) -> Result<ReconcileOutcome, AppError> {
        let repo = MemberRepository::new(&self.state.db);

        for _ in 0..MAX_STAGE_STEPS {
            let stage = member.fulfilment_stage;
            let advanced = match stage {
                FulfilmentStage::Pending => repo.commit_accepted(&member.id).await?,
                FulfilmentStage::StatusCommitted => {
                    let card_url = self.store_card(&member).await?;
                    repo.attach_card(&member.id, &card_url).await?
                }
                FulfilmentStage::ArtifactReady => {
                    let card_url =
                        member
                            .card_url
                            .as_deref()
                            .ok_or_else(|| InternalError::MissingArtifact {
                                record: member_key(&member.member_code),
                            })?;
                    self.state
                        .notifier
                        .send(EmailMessage::membership_card(&member, card_url))
                        .await?;
                    repo.advance_stage(
                        &member.id,
                        FulfilmentStage::ArtifactReady,
                        FulfilmentStage::NotificationSent,
                    )
                    .await?
                }
                FulfilmentStage::NotificationSent => {
                    tracing::info!("Fulfilled membership of {}", member.member_code);
                    return Ok(ReconcileOutcome::Fulfilled);
                }
            };

            if !advanced {
                tracing::debug!(
                    "Member {} left stage {} concurrently",
                    member.member_code,
                    stage
                );
            }
            member = self.reload_member(&member.id).await?;
            if member.payment_status == PaymentStatus::Rejected {
                return Ok(ReconcileOutcome::Refused);
            }
        }

        if member.fulfilment_stage.is_complete() {
            tracing::info!("Fulfilled membership of {}", member.member_code);
            return Ok(ReconcileOutcome::Fulfilled);
        }

        Err(InternalError::StalledFulfilment {
            record: member_key(&member.member_code),
            stage: member.fulfilment_stage.to_string(),
        }
        .into())
    }

    /// Renders the member's card and stores it under its deterministic name.
    async fn store_card(&self, member: &Member) -> Result<String, AppError> {
        let renderer = self.state.card_renderer.clone();
        let details = CardDetails::from(member);
        let png = tokio::task::spawn_blocking(move || renderer.render(&details))
            .await
            .map_err(InternalError::from)??;

        let card_url = self
            .state
            .assets
            .store(
                AssetKind::Card,
                &format!("Card_{}.png", member.id),
                png,
                Some(CARD_CONTENT_TYPE),
            )
            .await?;

        Ok(card_url)
    }

    async fn reload_member(&self, member_id: &str) -> Result<Member, AppError> {
        MemberRepository::new(&self.state.db)
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found.".to_string()))
    }

    pub(super) async fn incomplete_members(&self) -> Result<Vec<Member>, AppError> {
        MemberRepository::new(&self.state.db)
            .get_incomplete_fulfilments()
            .await
    }
}
