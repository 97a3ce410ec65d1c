use thiserror::Error;

/// Failures the core can surface to a collaborator.
#[derive(Debug, Error)]
pub enum GameError {
    /// The external profile store could not be reached. Never fatal to
    /// gameplay: onboarding falls back to a transient profile and reads
    /// fall back to the seed set.
    #[error("profile store unavailable: {0}")]
    StoreUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A draw produced no profile even after seed fallback. The session
    /// cannot enter play and the player must be shown a blocking error.
    #[error("no profiles available to draw")]
    NoProfilesAvailable,
}

impl GameError {
    pub(crate) fn store_unavailable<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::StoreUnavailable(Box::new(err))
    }
}
