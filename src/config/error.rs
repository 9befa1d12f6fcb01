//! Configuration loading errors.

/// Error type for configuration loading.
#[derive(Debug, Clone)]
pub enum ConfigLoadError {
    /// I/O error reading file
    Io(String),
    /// YAML parsing error
    Parse(String),
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigLoadError::Io(msg) => write!(f, "I/O error: {}", msg),
            ConfigLoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigLoadError {}
