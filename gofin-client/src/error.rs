//! Error types returned by the API client, the dashboard loader and the uploader.

use thiserror::Error;

/// Failure talking to the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, timeout, DNS and similar
    #[error("could not reach the server: {0}")]
    Network(String),

    /// Non-success HTTP status. `message` is the server's own explanation when it sent one.
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("unexpected response from server: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Malformed(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("error").to_string(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Loading the dashboard failed. The view shows this and offers a retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("failed to load transactions: {0}")]
    Api(#[from] ApiError),
}

/// Importing the selected file failed. The selection is kept so the user can retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("could not read {name}: {message}")]
    Read { name: String, message: String },

    #[error("import of {name} failed: {source}")]
    Api { name: String, source: ApiError },
}

impl UploadError {
    /// Short text meant for the person at the screen, not for logs.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Read { name, .. } => {
                format!("The file {name} could not be read. Check that it still exists.")
            }
            UploadError::Api {
                source: ApiError::Status { message, .. },
                ..
            } => format!("The server rejected the import: {message}"),
            UploadError::Api {
                source: ApiError::Network(_),
                ..
            } => "The server could not be reached. Try again in a moment.".to_string(),
            UploadError::Api {
                source: ApiError::Malformed(_),
                ..
            } => "The server sent an unexpected response.".to_string(),
        }
    }
}
