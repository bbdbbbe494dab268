//! Error types for map geometry and its surrounding tooling

use std::fmt;
use std::io;

/// Map-specific error types
#[derive(Debug)]
pub enum MapError {
    /// An argument was rejected by a constructor
    InvalidArgument {
        /// Name of the offending parameter
        param: &'static str,
        /// Human readable reason
        message: String,
    },
    /// I/O error
    IoError(io::Error),
    /// Configuration could not be read
    ConfigError(String),
    /// Text could not be parsed into a point or bounds
    ParseError(String),
}

impl MapError {
    /// Build an invalid-argument error for the named parameter
    pub fn invalid_argument(param: &'static str, message: impl Into<String>) -> Self {
        MapError::InvalidArgument {
            param,
            message: message.into(),
        }
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidArgument { param, message } => {
                write!(f, "{} (Parameter '{}')", message, param)
            }
            MapError::IoError(e) => write!(f, "I/O error: {}", e),
            MapError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MapError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(error: io::Error) -> Self {
        MapError::IoError(error)
    }
}

/// Result type for map operations
pub type MapResult<T> = Result<T, MapError>;
