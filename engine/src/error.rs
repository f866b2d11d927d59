//! Error type shared by the fallible setup paths (config, capsule creation).
//!
//! The per-frame tick never returns errors; missing collaborators and bad
//! input are absorbed there instead.

/// Errors raised while configuring or loading the controller.
#[derive(Debug)]
pub enum StrideError {
    /// Standard I/O error while reading or writing a config file.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// Config values that cannot drive the controller.
    InvalidConfig(String),
    /// Capsule dimensions that break the upright / positive-radius rules.
    InvalidCapsule(String),
}

impl std::fmt::Display for StrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrideError::Io(e) => write!(f, "IO error: {e}"),
            StrideError::Json(e) => write!(f, "JSON error: {e}"),
            StrideError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            StrideError::InvalidCapsule(msg) => write!(f, "invalid capsule: {msg}"),
        }
    }
}

impl std::error::Error for StrideError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StrideError::Io(e) => Some(e),
            StrideError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StrideError {
    fn from(e: std::io::Error) -> Self {
        StrideError::Io(e)
    }
}

impl From<serde_json::Error> for StrideError {
    fn from(e: serde_json::Error) -> Self {
        StrideError::Json(e)
    }
}
