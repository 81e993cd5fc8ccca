use serde::{Deserialize, Serialize};

/// JSON body for error responses. Handlers keep the message static and
/// generic; failure detail only goes to the logs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }

    /// Returns the user-facing error message.
    pub fn error(&self) -> &str {
        &self.error
    }
}
