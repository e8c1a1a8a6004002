use thiserror::Error;

use crate::data_source::UpstreamError;

/// Caller-supplied argument rejected before any upstream call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("search query cannot be empty")]
    EmptySearchQuery,
    #[error("creature identifier cannot be empty")]
    EmptyIdentifier,
}

/// Failures raised by the gateway's read operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("creature \"{identifier}\" not found")]
    NotFound { identifier: String },

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl GatewayError {
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
        }
    }

    /// Stable code the transport layer puts on the wire.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "BAD_USER_INPUT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Upstream(_) => "UPSTREAM_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_identifier() {
        let error = GatewayError::not_found("9999");
        assert_eq!(error.to_string(), "creature \"9999\" not found");
        assert_eq!(error.code(), "NOT_FOUND");
    }

    #[test]
    fn validation_errors_keep_their_message() {
        let error = GatewayError::from(ValidationError::EmptySearchQuery);
        assert_eq!(error.to_string(), "search query cannot be empty");
        assert_eq!(error.code(), "BAD_USER_INPUT");
    }
}
