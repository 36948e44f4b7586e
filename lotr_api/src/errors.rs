//! Error types for the API client.

/// Errors that can occur when constructing the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The base URL was empty at construction time.
    #[error("Base API URL is missing.")]
    MissingBaseUrl,
    /// The authentication token was empty at construction time.
    #[error("Authentication token is missing.")]
    MissingToken,
    /// The authentication token was absent when a request tried to build headers.
    #[error("Request failed: Authentication required.")]
    AuthenticationRequired,
    /// The API returned a non-success status. Carries the status text.
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// A transport-level failure from the underlying HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The response body was not valid JSON for the expected shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
