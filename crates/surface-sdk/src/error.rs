//! Error types for calls crossing the host boundary

/// Result type for host calls
pub type HostResult<T> = Result<T, HostError>;

/// Host call error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    /// The host rejected or failed the call
    ///
    /// Produced by the host runtime and forwarded untouched by every proxy
    /// layer between the caller and the host.
    #[error("{method}: {message}")]
    Invocation {
        /// Name of the host method that failed
        method: String,
        /// Host-provided message
        message: String,
        /// Host-provided diagnostic payload (exception class, stack, ...)
        diagnostic: Option<String>,
    },

    /// Type mismatch during conversion
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// Invalid argument
    #[error("Argument error: {0}")]
    ArgumentError(String),
}

impl HostError {
    /// Build a host invocation failure without diagnostics
    pub fn invocation(method: impl Into<String>, message: impl Into<String>) -> Self {
        HostError::Invocation {
            method: method.into(),
            message: message.into(),
            diagnostic: None,
        }
    }

    /// Build a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        HostError::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Host-provided diagnostic, if this error came from the host
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            HostError::Invocation { diagnostic, .. } => diagnostic.as_deref(),
            _ => None,
        }
    }
}

impl From<String> for HostError {
    fn from(s: String) -> Self {
        HostError::ArgumentError(s)
    }
}

impl From<&str> for HostError {
    fn from(s: &str) -> Self {
        HostError::ArgumentError(s.to_string())
    }
}
