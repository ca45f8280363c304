use thiserror::Error;

/// Top-level error type for Asha.
///
/// Subsystem crates define their own error types; this one covers the
/// shared concerns (configuration, I/O, serialization, server bootstrap).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AshaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for AshaError {
    fn from(err: toml::de::Error) -> Self {
        AshaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AshaError {
    fn from(err: toml::ser::Error) -> Self {
        AshaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AshaError {
    fn from(err: serde_json::Error) -> Self {
        AshaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Asha operations.
pub type Result<T> = std::result::Result<T, AshaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AshaError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AshaError = io_err.into();
        assert!(matches!(err, AshaError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: AshaError = toml_err.into();
        assert!(matches!(err, AshaError::Config(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AshaError = json_err.into();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
