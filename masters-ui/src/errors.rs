use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Server error: {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        /// `message` field of the server's JSON error body, if any.
        message: Option<String>,
    },
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Coarse grouping of failures, for callers that react differently to
/// (say) an expired session than to a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    ServerUnavailable,
    Other,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self.status() {
            Some(400) | Some(422) => ErrorClass::Validation,
            Some(401) => ErrorClass::Unauthorized,
            Some(403) => ErrorClass::Forbidden,
            Some(404) => ErrorClass::NotFound,
            Some(409) => ErrorClass::Conflict,
            Some(500) | Some(503) => ErrorClass::ServerUnavailable,
            _ => ErrorClass::Other,
        }
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        let ApiError::Status {
            status,
            status_text,
            ..
        } = self
        else {
            return format!("Error: {}", self);
        };

        let server = self.server_message().map(str::to_string);
        match status {
            400 => server.unwrap_or_else(|| "Bad Request: Please check your input".to_string()),
            401 => "Unauthorized: Please login again".to_string(),
            403 => "Forbidden: You do not have permission to perform this action".to_string(),
            404 => server.unwrap_or_else(|| "Resource not found".to_string()),
            409 => server.unwrap_or_else(|| "Conflict: This resource already exists".to_string()),
            422 => server.unwrap_or_else(|| "Validation Error: Please check your input".to_string()),
            500 => "Server Error: Please try again later".to_string(),
            503 => "Service Unavailable: Please try again later".to_string(),
            _ => server.unwrap_or_else(|| format!("Error: {} {}", status, status_text)),
        }
    }

    /// The server's own message when it sent one, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// One item of a batch operation that did not go through.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{id}: {message}")]
pub struct BatchFailure {
    pub id: String,
    pub message: String,
}

/// Per-item results of a batch delete or bulk save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub succeeded: Vec<String>,
    pub failed: Vec<BatchFailure>,
}

impl BatchOutcome {
    pub fn record(&mut self, id: String, result: Result<()>) {
        match result {
            Ok(()) => self.succeeded.push(id),
            Err(e) => self.failed.push(BatchFailure {
                id,
                message: e.user_message(),
            }),
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete_success(&self) -> bool {
        self.failed.is_empty()
    }
}
