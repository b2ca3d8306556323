use thiserror::Error;

/// Failures of the external collaborators a request or reconciliation depends on.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The asset store rejected a write.
    #[error("Asset store error: {0}")]
    Storage(#[from] object_store::Error),

    /// An outbound HTTP request could not be completed.
    #[error("HTTP request to provider failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered, but with a response we treat as a failure.
    #[error("{provider} rejected the request with status {status}: {body}")]
    Rejected {
        /// Provider name for logging
        provider: &'static str,
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, truncated by the caller if needed
        body: String,
    },

    /// A URL could not be built from the configured base address.
    #[error("Invalid provider URL: {0}")]
    Url(#[from] url::ParseError),
}
