//! Data-access failure taxonomy.

/// Failures surfaced by a [`crate::MarketData`] implementation.
///
/// The aggregator contains `Unavailable` (zero records for the affected
/// asset or category, continue) and propagates `Session` (the terminal
/// connection itself is gone; nothing further can be fetched).
#[derive(Debug, Clone, thiserror::Error)]
pub enum DataError {
    /// The source could not answer for one asset or sector. Recoverable.
    #[error("data unavailable for {code}: {reason}")]
    Unavailable { code: String, reason: String },

    /// The terminal session could not be established or was lost. Fatal.
    #[error("terminal session error: {0}")]
    Session(String),
}

impl DataError {
    pub fn unavailable(code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            code: code.into(),
            reason: reason.into(),
        }
    }

    pub fn session(reason: impl Into<String>) -> Self {
        Self::Session(reason.into())
    }

    /// True for failures that abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}
