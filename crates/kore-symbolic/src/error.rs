//! Errors raised by expression hooks that a node kind cannot answer.

/// Failure of an on-demand expression operation.
///
/// `Unsupported` means the operation has no meaning for the node kind;
/// `FutureRelease` means it is meaningful but not shipped yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolicError {
    #[error("{operation} is not supported: {message}")]
    Unsupported {
        operation: &'static str,
        message: String,
    },

    #[error("{feature} is not yet implemented and will be available in a future release")]
    FutureRelease { feature: String },
}

impl SymbolicError {
    pub fn unsupported(operation: &'static str, message: impl Into<String>) -> Self {
        SymbolicError::Unsupported {
            operation,
            message: message.into(),
        }
    }

    pub fn future_release(feature: impl Into<String>) -> Self {
        SymbolicError::FutureRelease {
            feature: feature.into(),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, SymbolicError::Unsupported { .. })
    }

    pub fn is_future_release(&self) -> bool {
        matches!(self, SymbolicError::FutureRelease { .. })
    }
}

pub type Result<T> = std::result::Result<T, SymbolicError>;
