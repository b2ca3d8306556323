use crate::server::{
    data::order::OrderRepository,
    error::{internal::InternalError, AppError},
    model::{
        fulfilment::FulfilmentStage,
        order::{Order, OrderStatus},
        payment::{PaymentNotification, PaymentSubject, ReconcileOutcome},
    },
    provider::email::EmailMessage,
};

use super::{order_key, ReconciliationService, MAX_STAGE_STEPS};

impl<'a> ReconciliationService<'a> {
    pub(super) async fn order_notification(
        &self,
        order_code: &str,
        notification: &PaymentNotification,
    ) -> Result<ReconcileOutcome, AppError> {
        let repo = OrderRepository::new(&self.state.db);
        let order = repo
            .find_by_code(order_code)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(PaymentSubject::Order.not_found_message().to_string())
            })?;

        let key = order_key(&order.order_code);
        if let Some(outcome) = self.screen(&key, notification).await? {
            return Ok(outcome);
        }

        self.resume_order(order.id).await
    }

    /// Marks an order paid and sends its confirmation.
    ///
    /// Used by the admin status update. An already paid order resumes from the stage
    /// it reached.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order after fulfilment
    /// - `Err(AppError::NotFound)` - No order with this id
    /// - `Err(AppError::BadRequest)` - The order was cancelled
    pub async fn pay_order(&self, order_id: i32) -> Result<Order, AppError> {
        match self.resume_order(order_id).await? {
            ReconcileOutcome::Refused => Err(AppError::BadRequest(
                "Invalid status transition from Cancelled to Paid.".to_string(),
            )),
            _ => self.reload_order(order_id).await,
        }
    }

    /// Runs the order's remaining fulfilment stages while holding its lock.
    pub(super) async fn resume_order(&self, order_id: i32) -> Result<ReconcileOutcome, AppError> {
        let order = self.reload_order(order_id).await?;
        let _guard = self.state.locks.acquire(&order_key(&order.order_code)).await;

        let order = self.reload_order(order_id).await?;
        if order.status == OrderStatus::Cancelled {
            tracing::warn!("Refusing payment for cancelled order {}", order.order_code);
            return Ok(ReconcileOutcome::Refused);
        }
        if order.fulfilment_stage.is_complete() {
            return Ok(ReconcileOutcome::AlreadyFulfilled);
        }

        self.drive_order(order).await
    }

    async fn drive_order(&self, mut order: Order) -> Result<ReconcileOutcome, AppError> {
        let repo = OrderRepository::new(&self.state.db);

        for _ in 0..MAX_STAGE_STEPS {
            let advanced = match order.fulfilment_stage {
                FulfilmentStage::Pending => repo.commit_paid(order.id).await?,
                // Orders produce no artifact.
                FulfilmentStage::StatusCommitted => {
                    repo.advance_stage(
                        order.id,
                        FulfilmentStage::StatusCommitted,
                        FulfilmentStage::ArtifactReady,
                    )
                    .await?
                }
                FulfilmentStage::ArtifactReady => {
                    self.state
                        .notifier
                        .send(EmailMessage::order_confirmation(&order))
                        .await?;
                    repo.advance_stage(
                        order.id,
                        FulfilmentStage::ArtifactReady,
                        FulfilmentStage::NotificationSent,
                    )
                    .await?
                }
                FulfilmentStage::NotificationSent => {
                    tracing::info!("Fulfilled order {}", order.order_code);
                    return Ok(ReconcileOutcome::Fulfilled);
                }
            };

            if !advanced {
                tracing::debug!(
                    "Order {} left stage {} concurrently",
                    order.order_code,
                    order.fulfilment_stage
                );
            }
            order = self.reload_order(order.id).await?;
            if order.status == OrderStatus::Cancelled {
                return Ok(ReconcileOutcome::Refused);
            }
        }

        if order.fulfilment_stage.is_complete() {
            tracing::info!("Fulfilled order {}", order.order_code);
            return Ok(ReconcileOutcome::Fulfilled);
        }

        Err(InternalError::StalledFulfilment {
            record: order_key(&order.order_code),
            stage: order.fulfilment_stage.to_string(),
        }
        .into())
    }

    async fn reload_order(&self, order_id: i32) -> Result<Order, AppError> {
        OrderRepository::new(&self.state.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))
    }

    pub(super) async fn incomplete_orders(&self) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(&self.state.db)
            .get_incomplete_fulfilments()
            .await
    }
}
