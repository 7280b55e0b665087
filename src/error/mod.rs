use std::fmt;

#[derive(Debug)]
pub enum ProviderError {
    NotInitialized,
    Http(reqwest::Error),
    Status { status: u16, message: String },
    EmptyResponse,
}

impl std::error::Error for ProviderError {}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::NotInitialized => write!(f, "Gemini client not initialized (missing API key)"),
            ProviderError::Http(e) => write!(f, "HTTP error: {}", e),
            ProviderError::Status { status, message } => {
                write!(f, "Gemini API returned {}: {}", status, message)
            }
            ProviderError::EmptyResponse => write!(f, "Empty response from Gemini API"),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Missing,
}

impl std::error::Error for StorageError {}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Serde(e) => write!(f, "Serialization error: {}", e),
            StorageError::Missing => write!(f, "No thought stored yet"),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serde(err)
    }
}

#[derive(Debug)]
pub enum ShareError {
    /// No native share facility for this text; callers fall back to the clipboard.
    Unsupported,
    Failed(String),
}

impl std::error::Error for ShareError {}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareError::Unsupported => write!(f, "Sharing is not supported here"),
            ShareError::Failed(reason) => write!(f, "Sharing failed: {}", reason),
        }
    }
}
