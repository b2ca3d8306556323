//! Persisted progress of a record through payment fulfilment.

use std::fmt;

use crate::server::error::internal::InternalError;

/// Stage a member or order has reached after its payment was confirmed.
///
/// Stages only ever move forward, one step at a time:
/// `Pending → StatusCommitted → ArtifactReady → NotificationSent`. Each stage is
/// written only after the side effect it records has succeeded, so a record that
/// stopped part-way can be resumed from the stage it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FulfilmentStage {
    /// Record exists but no payment has been committed.
    Pending,
    /// Accepted/Paid status has been written.
    StatusCommitted,
    /// The deliverable (membership card) has been stored, or none is needed.
    ArtifactReady,
    /// The confirmation email was accepted by the provider. Terminal.
    NotificationSent,
}

impl FulfilmentStage {
    /// Stored column value for this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::StatusCommitted => "status_committed",
            Self::ArtifactReady => "artifact_ready",
            Self::NotificationSent => "notification_sent",
        }
    }

    /// Parses a stored column value.
    ///
    /// # Arguments
    /// - `value` - Value read from a `fulfilment_stage` column
    ///
    /// # Returns
    /// - `Ok(FulfilmentStage)` - Matching stage
    /// - `Err(InternalError::UnknownStoredValue)` - The column holds an unknown value
    pub fn from_stored(value: &str) -> Result<Self, InternalError> {
        match value {
            "pending" => Ok(Self::Pending),
            "status_committed" => Ok(Self::StatusCommitted),
            "artifact_ready" => Ok(Self::ArtifactReady),
            "notification_sent" => Ok(Self::NotificationSent),
            other => Err(InternalError::UnknownStoredValue {
                column: "fulfilment_stage",
                value: other.to_string(),
            }),
        }
    }

    pub fn is_complete(self) -> bool {
        self == Self::NotificationSent
    }
}

impl fmt::Display for FulfilmentStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
