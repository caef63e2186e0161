use thiserror::Error;

/// Error types for stringkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StringKitError {
    // Coercion errors (integers, dates, integer lists)
    #[error("Parse error: {message}")]
    Parse { message: String },

    // Structural errors (malformed key-value pairs)
    #[error("Format error: {message}")]
    Format { message: String },
}

impl StringKitError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    /// Create a format error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format { message: message.into() }
    }

    /// Get error category for logging and metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::Format { .. } => "format",
        }
    }
}

/// Result type alias for stringkit
pub type StringKitResult<T> = std::result::Result<T, StringKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = StringKitError::parse("bad integer literal");
        assert_eq!(error.category(), "parse");
        assert!(error.to_string().contains("bad integer literal"));
    }

    #[test]
    fn test_format_error() {
        let error = StringKitError::format("pair missing '=' separator");
        assert_eq!(error.category(), "format");
        assert!(error.to_string().starts_with("Format error:"));
    }
}
