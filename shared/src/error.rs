use serde_json::Error as JsonError;
use thiserror::Error;

/// Message shown to the user whenever the dataset could not be loaded.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load contest data. Please try again later.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Malformed dataset: {0}")]
    Malformed(String),

    #[error("Malformed dataset: top-level value is not an array")]
    NotAnArray,
}

impl LoadError {
    /// The text rendered in the error panel. The technical detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

impl From<JsonError> for LoadError {
    fn from(error: JsonError) -> Self {
        Self::Malformed(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_error_maps_to_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("[{").unwrap_err();
        let load: LoadError = err.into();
        assert!(matches!(load, LoadError::Malformed(_)));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_user_message_is_uniform() {
        assert_eq!(LoadError::NotAnArray.user_message(), LOAD_FAILURE_MESSAGE);
        assert_eq!(
            LoadError::Network("offline".into()).user_message(),
            LOAD_FAILURE_MESSAGE
        );
    }
}
