use thiserror::Error;

/// Storage-level failure.
///
/// `Conflict` is the only variant with domain meaning (uniqueness
/// constraints); everything else degrades to an internal error at the HTTP
/// boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
