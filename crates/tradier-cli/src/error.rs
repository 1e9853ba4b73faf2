use std::fmt;
use std::path::PathBuf;

/// Result type for tradier CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside of rendering.
///
/// Rendering itself never fails; a malformed response degrades to a notice or
/// to the raw bytes.
#[derive(Debug)]
pub enum Error {
    /// Reading the response body failed
    Read {
        path: Option<PathBuf>,
        source: std::io::Error,
    },

    /// Writing rendered output failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Read {
                path: Some(path),
                source,
            } => write!(f, "Failed to read {}: {}", path.display(), source),
            Error::Read { path: None, source } => {
                write!(f, "Failed to read standard input: {}", source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Read { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
