// ============================================================================
// ERRORS - Fallos del cliente API
// ============================================================================

/// Failure of a single remote call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("ZIP code '{zip_code}' not found")]
    ZipNotFound { zip_code: String },
}

impl ApiError {
    /// Stable code for log lines
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "NETWORK_ERROR",
            ApiError::Status { .. } => "HTTP_STATUS",
            ApiError::Parse { .. } => "PARSE_ERROR",
            ApiError::Serialization { .. } => "SERIALIZATION_ERROR",
            ApiError::ZipNotFound { .. } => "ZIP_NOT_FOUND",
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
