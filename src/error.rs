/// Error types for translation resource loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The resource path does not exist
    ResourceNotFound(String),
    /// The resource extension names no supported format
    UnsupportedFormat(String),
    /// The resource exists but its content could not be parsed
    ParseError(String),
}

impl std::fmt::Display for I18nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            I18nError::ResourceNotFound(path) => write!(f, "{} not found", path),
            I18nError::UnsupportedFormat(extension) => {
                write!(f, ".{} file type not supported", extension)
            }
            I18nError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for I18nError {}

/// Result type for loading operations
pub type I18nResult<T> = Result<T, I18nError>;
