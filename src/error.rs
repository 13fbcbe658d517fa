use thiserror::Error;

/// Unified error type for dev-version operations
#[derive(Error, Debug)]
pub enum DevVersionError {
    #[cfg(feature = "git")]
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Reference error: {0}")]
    Reference(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest parsing failed: {0}")]
    Manifest(#[from] toml::de::Error),
}

/// Convenience type alias for Results in dev-version
pub type Result<T> = std::result::Result<T, DevVersionError>;

impl DevVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DevVersionError::Config(msg.into())
    }

    /// Create a reference error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        DevVersionError::Reference(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DevVersionError::Version(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DevVersionError::config("no repository provider available");
        assert_eq!(
            err.to_string(),
            "Configuration error: no repository provider available"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DevVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_manifest() {
        let toml_err = toml::from_str::<toml::Table>("write_to = ").unwrap_err();
        let err: DevVersionError = toml_err.into();
        assert!(err.to_string().starts_with("Manifest parsing failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DevVersionError::config("x"), "Configuration error"),
            (DevVersionError::reference("x"), "Reference error"),
            (DevVersionError::version("x"), "Version error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
