use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value no domain variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {column} value '{value}' stored in the database")]
    UnknownStoredValue {
        /// Column that held the value
        column: &'static str,
        /// The unparseable value
        value: String,
    },

    /// A record reached `artifact_ready` without the artifact its notification needs.
    #[error("{record} reached artifact_ready without a stored card URL")]
    MissingArtifact {
        /// Record identifier, e.g. `member:MBH-007`
        record: String,
    },

    /// Fulfilment stopped advancing before reaching its final stage.
    #[error("Fulfilment of {record} stalled at stage '{stage}'")]
    StalledFulfilment {
        /// Record identifier, e.g. `order:1A2B3C4D`
        record: String,
        /// Stage the record was left at
        stage: String,
    },

    /// A blocking task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
