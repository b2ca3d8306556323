//! Payment reconciliation.
//!
//! Turns a payment notification, an admin status change or a scheduler sweep into a
//! run of the record's fulfilment stages. A run holds the record's lock, reloads the
//! record, and then performs one side effect per stage, recording each stage with a
//! conditional update on the stage before it. A run that fails part-way leaves the
//! record at the last recorded stage, and the next run continues from there.

pub mod lock;
mod member;
mod order;

use crate::server::{
    error::AppError,
    model::payment::{PaymentNotification, PaymentSubject, ReconcileOutcome},
    state::AppState,
};

/// Upper bound on loop iterations in one run: three stage steps, the completion
/// check, and one retry after a lost race.
const MAX_STAGE_STEPS: usize = 5;

pub struct ReconciliationService<'a> {
    state: &'a AppState,
}

impl<'a> ReconciliationService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Processes a payment notification for the given record kind.
    ///
    /// The code is taken from `item_name` and the record is looked up before the
    /// gateway is asked to verify the notification. Unverified or incomplete payments
    /// are acknowledged without touching the record.
    ///
    /// # Arguments
    /// - `subject` - Whether the notification settles a membership or an order
    /// - `notification` - Form fields posted by the gateway
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome)` - What the notification caused
    /// - `Err(AppError::BadRequest)` - `item_name` names no code
    /// - `Err(AppError::NotFound)` - No record has the code
    /// - `Err(AppError)` - Verification, persistence or a provider failed
    pub async fn handle_notification(
        &self,
        subject: PaymentSubject,
        notification: &PaymentNotification,
    ) -> Result<ReconcileOutcome, AppError> {
        let code = subject
            .extract_code(notification.item_name())
            .ok_or_else(|| AppError::BadRequest(subject.missing_code_message().to_string()))?;

        match subject {
            PaymentSubject::Member => self.member_notification(&code, notification).await,
            PaymentSubject::Order => self.order_notification(&code, notification).await,
        }
    }

    /// Verifies a notification with the gateway and checks that it reports a settled payment.
    ///
    /// # Returns
    /// - `Ok(None)` - The notification should drive fulfilment
    /// - `Ok(Some(outcome))` - The notification is acknowledged without effect
    async fn screen(
        &self,
        record: &str,
        notification: &PaymentNotification,
    ) -> Result<Option<ReconcileOutcome>, AppError> {
        if !self.state.gateway.verify(notification).await? {
            tracing::warn!("Ignoring unverified payment notification for {}", record);
            return Ok(Some(ReconcileOutcome::Unverified));
        }

        if !notification.is_complete() {
            tracing::info!(
                "Ignoring payment notification for {} with status '{}'",
                record,
                notification.payment_status()
            );
            return Ok(Some(ReconcileOutcome::NotComplete));
        }

        Ok(None)
    }

    /// Resumes every accepted member and paid order whose fulfilment stopped part-way.
    ///
    /// Each record is processed independently; a failure is logged and the sweep
    /// moves on to the next record.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of records brought to `notification_sent`
    /// - `Err(AppError)` - The incomplete records could not be listed
    pub async fn resume_incomplete(&self) -> Result<usize, AppError> {
        let mut fulfilled = 0;

        for member in self.incomplete_members().await? {
            match self.resume_member(&member.id).await {
                Ok(ReconcileOutcome::Fulfilled) => fulfilled += 1,
                Ok(_) => {}
                Err(e) => tracing::error!(
                    "Failed to resume fulfilment of member {}: {}",
                    member.member_code,
                    e
                ),
            }
        }

        for order in self.incomplete_orders().await? {
            match self.resume_order(order.id).await {
                Ok(ReconcileOutcome::Fulfilled) => fulfilled += 1,
                Ok(_) => {}
                Err(e) => tracing::error!(
                    "Failed to resume fulfilment of order {}: {}",
                    order.order_code,
                    e
                ),
            }
        }

        Ok(fulfilled)
    }
}

fn member_key(member_code: &str) -> String {
    format!("member:{}", member_code)
}

fn order_key(order_code: &str) -> String {
    format!("order:{}", order_code)
}
