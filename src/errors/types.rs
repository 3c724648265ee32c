use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatbenchError {
    #[error("Only JSON files are allowed: {0}")]
    InvalidFileType(String),

    #[error("Error processing file: {0}")]
    MalformedJson(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0} API key required")]
    MissingCredential(String),

    #[error("Unsupported model: {0}")]
    UnsupportedModel(String),

    #[error("Provider error: {0}")]
    ProviderCall(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimit(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChatbenchError {
    /// Upload validation failures are the caller's fault; everything else
    /// surfaces as a server error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ChatbenchError::InvalidFileType(_)
                | ChatbenchError::MalformedJson(_)
                | ChatbenchError::BadRequest(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let err = ChatbenchError::MissingCredential("OpenAI".into());
        assert_eq!(err.to_string(), "OpenAI API key required");
    }

    #[test]
    fn test_client_errors() {
        assert!(ChatbenchError::InvalidFileType("faq.txt".into()).is_client_error());
        assert!(ChatbenchError::MalformedJson("eof".into()).is_client_error());
        assert!(!ChatbenchError::UnsupportedModel("llama".into()).is_client_error());
        assert!(!ChatbenchError::ProviderCall("quota".into()).is_client_error());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: ChatbenchError = io.into();
        assert!(matches!(err, ChatbenchError::Io(_)));
    }
}
