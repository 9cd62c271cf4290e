use thiserror::Error;

use crate::errors::domain::{DomainError, ValidationKind};

/// Service-level error type returned by the session core's entry points.
///
/// The core has no I/O and no retryable operations; everything here is
/// state-validity handling surfaced to the transport caller, never fatal to
/// the session.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for any error variant.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn invalid(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: match kind {
                    ValidationKind::UnknownMark => "UNKNOWN_MARK",
                    ValidationKind::Other(_) => "VALIDATION",
                },
                detail: detail.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_validation_maps_to_code() {
        let err: AppError =
            DomainError::validation(ValidationKind::UnknownMark, "unknown mark: pineapples").into();
        assert_eq!(err.code(), "UNKNOWN_MARK");
        assert!(err.to_string().contains("pineapples"));
    }
}
