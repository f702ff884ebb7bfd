#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Document store returned {status}: {message}")]
    Store { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No business data provided, cannot create jobs")]
    NoBusinesses,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Build a store error from a failed HTTP response body.
    /// Firestore wraps failures as `{"error": {"code", "message", "status"}}`.
    pub fn from_store_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| body.trim().to_string());
        AppError::Store { status, message }
    }
}
