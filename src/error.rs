use std::fmt;

#[derive(Debug)]
pub enum CatApiError {
    /// A numeric option fell outside its accepted range.
    Range(String),
    /// An option had an unknown value or a required one was missing.
    Invalid(String),
    MissingApiKey {
        operation: &'static str,
    },
    /// The service answered with an `apierror` element.
    Api(String),
    Decode(String),
    Config(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl CatApiError {
    /// True for errors raised locally before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatApiError::Range(_) | CatApiError::Invalid(_) | CatApiError::MissingApiKey { .. }
        )
    }
}

impl fmt::Display for CatApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatApiError::Range(msg) => write!(f, "{}", msg),
            CatApiError::Invalid(msg) => write!(f, "{}", msg),
            CatApiError::MissingApiKey { operation } => {
                write!(f, "Can't use {} when no API key is provided", operation)
            }
            CatApiError::Api(msg) => write!(f, "{}", msg),
            CatApiError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            CatApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CatApiError::NetworkError(e) => write!(f, "Network error: {}", e),
            CatApiError::IoError(e) => write!(f, "IO error: {}", e),
            CatApiError::JsonError(e) => write!(f, "JSON error: {}", e),
            CatApiError::YamlError(e) => write!(f, "YAML error: {}", e),
            CatApiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CatApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatApiError::NetworkError(e) => Some(e),
            CatApiError::IoError(e) => Some(e),
            CatApiError::JsonError(e) => Some(e),
            CatApiError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatApiError {
    fn from(err: reqwest::Error) -> Self {
        CatApiError::NetworkError(err)
    }
}

impl From<std::io::Error> for CatApiError {
    fn from(err: std::io::Error) -> Self {
        CatApiError::IoError(err)
    }
}

impl From<serde_json::Error> for CatApiError {
    fn from(err: serde_json::Error) -> Self {
        CatApiError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for CatApiError {
    fn from(err: serde_yaml::Error) -> Self {
        CatApiError::YamlError(err)
    }
}

impl From<anyhow::Error> for CatApiError {
    fn from(err: anyhow::Error) -> Self {
        CatApiError::Other(err.to_string())
    }
}

impl From<String> for CatApiError {
    fn from(msg: String) -> Self {
        CatApiError::Other(msg)
    }
}

impl From<&str> for CatApiError {
    fn from(msg: &str) -> Self {
        CatApiError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatApiError>;
