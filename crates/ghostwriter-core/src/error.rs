use thiserror::Error;

/// Core error types for the ghostwriter workspace
#[derive(Debug, Error)]
pub enum GhostwriterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Journal storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reflection generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value '{value}' for parameter '{parameter}', expected: {expected}")]
    InvalidValue {
        parameter: String,
        value: String,
        expected: String,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    /// Environment variable could not be parsed
    #[error("Failed to resolve environment variable: {0}")]
    EnvironmentResolution(String),
}

/// Journal storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// No entry exists for the requested date
    #[error("No journal entry for {0}")]
    NotFound(String),

    /// The backing document could not be read or written
    #[error("Journal file {path} is unreadable: {reason}")]
    Io { path: String, reason: String },

    /// Serialization failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

/// Input validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Mood outside the 1..=5 scale
    #[error("Mood {0} is out of range (expected 1-5)")]
    MoodOutOfRange(i64),

    /// Date not in YYYY-MM-DD form
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Note exceeds the configured length
    #[error("Note is {length} characters long (max: {max_length})")]
    NoteTooLong { length: usize, max_length: usize },
}

/// Failures inside the reflection generation step
///
/// These never reach callers of the enhancer; they select the fallback path.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A template could not be composed
    #[error("Template composition failed: {0}")]
    Composition(String),

    /// The generator is not available
    #[error("Generator unavailable: {0}")]
    Unavailable(String),
}

pub type GhostwriterResult<T> = Result<T, GhostwriterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_family() {
        let err: GhostwriterError = ValidationError::MoodOutOfRange(9).into();
        assert_eq!(
            err.to_string(),
            "Validation error: Mood 9 is out of range (expected 1-5)"
        );

        let err: GhostwriterError = StorageError::NotFound("2024-03-01".to_string()).into();
        assert!(err.to_string().starts_with("Storage error:"));
    }

    #[test]
    fn test_config_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            parameter: "enhancer.latency_base_ms".to_string(),
            value: "abc".to_string(),
            expected: "integer milliseconds".to_string(),
        };
        assert!(err.to_string().contains("enhancer.latency_base_ms"));
        assert!(err.to_string().contains("integer milliseconds"));
    }
}
