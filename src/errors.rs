use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the test deployer
#[derive(Debug)]
pub enum Error {
    /// The command line does not have the supported shape
    Usage { message: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when the manifest cannot be rendered
    Serialization {
        source: serde_json::Error,
        detail: String,
    },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage { message } => {
                write!(f, "Wrong arguments: {message}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Serialization { detail, .. } => {
                write!(f, "Failed to serialize {detail}")
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::Serialization { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Custom Result type for the test deployer
///
/// # Examples
/// ```
/// use test_deployer::prelude::{Result, usage_error};
///
/// fn require_source(source: Option<&str>) -> Result<&str> {
///     source.ok_or_else(|| usage_error("the argument '--source <DIR>' is required"))
/// }
///
/// assert!(require_source(None).unwrap_err().is_usage());
/// assert_eq!(require_source(Some("tests")).unwrap(), "tests");
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a usage error
pub fn usage_error(message: &str) -> Error {
    Error::Usage {
        message: message.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a serialization error
pub fn serialization_error(err: serde_json::Error, detail: &str) -> Error {
    Error::Serialization {
        source: err,
        detail: detail.to_string(),
    }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

impl Error {
    /// Whether the error comes from an unsupported command line
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error() {
        let error = usage_error("the argument '--source <DIR>' is required");

        assert!(error.is_usage());
        let error_string = format!("{error}");
        assert!(
            error_string.contains("--source"),
            "Error message should contain the clap message"
        );
    }

    #[test]
    fn test_file_operation_error() {
        let path = PathBuf::from("./tests/missing");
        let io_error = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let error = file_operation_error(io_error, path.clone(), "list directory");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("list directory"),
            "Error message should contain the operation"
        );
        assert!(
            error_string.contains("./tests/missing"),
            "Error message should contain the path"
        );
        assert!(error.source().is_some(), "The io error should be kept as source");
        assert!(!error.is_usage());
    }

    #[test]
    fn test_invalid_filename_error() {
        let path = PathBuf::from("./tests/bad_test.c");
        let error = invalid_filename_error(path);

        let error_string = format!("{error}");
        assert!(
            error_string.contains("./tests/bad_test.c"),
            "Error message should contain the path"
        );
    }

    #[test]
    fn test_serialization_error() {
        let json_error = serde_json::from_str::<u8>("not json").unwrap_err();
        let error = serialization_error(json_error, "test manifest");

        let error_string = format!("{error}");
        assert_eq!(error_string, "Failed to serialize test manifest");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_parsing_error() {
        let io_error = io::Error::new(io::ErrorKind::InvalidData, "Invalid YAML");
        let error = config_parsing_error(io_error, "Missing required field");

        let error_string = format!("{error}");
        assert!(
            error_string.contains("Missing required field"),
            "Error message should contain the detail"
        );
    }
}
