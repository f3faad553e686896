use shared::{ApiResponse, EnvelopeError};
use thiserror::Error;

/// The only message a caller sees for a failed live request.
pub const NETWORK_FAILURE_MESSAGE: &str = "network request failed";
pub const STORAGE_FAILURE_MESSAGE: &str = "local user store unavailable";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Local storage unavailable: {0}")]
    Unavailable(String),
    #[error("Stored user list is corrupt: {0}")]
    Corrupt(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Malformed response: {0}")]
    Decode(#[from] EnvelopeError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl<T> From<ClientError> for ApiResponse<T> {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(message) => ApiResponse::failure(message),
            ClientError::Transport(_) | ClientError::Decode(_) => {
                ApiResponse::failure(NETWORK_FAILURE_MESSAGE)
            }
            ClientError::Storage(_) => ApiResponse::failure(STORAGE_FAILURE_MESSAGE),
        }
    }
}

/// Logs the cause of a failed operation and folds it into a failure envelope.
pub(crate) fn failure_response<T>(operation: &str, err: ClientError) -> ApiResponse<T> {
    match &err {
        ClientError::Validation(message) => log::debug!("{} rejected: {}", operation, message),
        _ => log::error!("{} failed: {}", operation, err),
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_keeps_its_message() {
        let response: ApiResponse<()> =
            ClientError::Validation("Username must be at least 2 characters".to_string()).into();
        assert_eq!(
            response.message(),
            Some("Username must be at least 2 characters")
        );
    }

    #[test]
    fn test_transport_cause_is_hidden() {
        let err = ClientError::from(TransportError::Network("connection refused".to_string()));
        let response: ApiResponse<u32> = failure_response("get_dashboard_data", err);
        assert_eq!(response, ApiResponse::failure(NETWORK_FAILURE_MESSAGE));
    }

    #[test]
    fn test_decode_error_looks_like_network_failure() {
        let err = ApiResponse::<u32>::from_json("not json").unwrap_err();
        let response: ApiResponse<u32> = ClientError::from(err).into();
        assert_eq!(response.message(), Some(NETWORK_FAILURE_MESSAGE));
    }

    #[test]
    fn test_storage_failure_message() {
        let err = ClientError::from(StorageError::Corrupt("expected value".to_string()));
        let response: ApiResponse<()> = err.into();
        assert_eq!(response.message(), Some(STORAGE_FAILURE_MESSAGE));
    }
}
