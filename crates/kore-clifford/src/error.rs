//! Error type for algebra descriptors.

/// Errors raised while loading or checking an [`AlgebraDescriptor`](crate::AlgebraDescriptor).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliffordError {
    #[error("invalid algebra configuration: {0}")]
    Config(String),

    #[error("inconsistent algebra descriptor: {0}")]
    Inconsistent(String),
}

pub type Result<T> = std::result::Result<T, CliffordError>;
