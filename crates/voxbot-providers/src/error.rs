//! Error types for provider selection and start-up checks.

/// Provider selection failed. Always fatal: retrying without new
/// credentials cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// None of the providers in the selection order has a usable key.
    #[error("no usable LLM provider: missing credentials {}", .missing.join(", "))]
    NoUsableProvider {
        /// Env vars of every provider that was tried, in selection order.
        missing: Vec<&'static str>,
    },
}

/// Start-up validation failed; the bot must not start its pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreflightError {
    #[error("{service} is not configured: set {env_key}")]
    MissingCredential {
        service: &'static str,
        env_key: &'static str,
    },

    #[error(transparent)]
    Selection(#[from] SelectionError),
}
