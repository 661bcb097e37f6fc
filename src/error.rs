use std::fmt::{Display, Formatter};

pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type Result<T> = std::result::Result<T, DynError>;

/// A latitude/longitude value that cannot be mapped to a marker position.
///
/// Raised instead of letting NaN leak into overlay or sphere coordinates;
/// callers decide how to render the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCoordinate {
    pub axis: &'static str,
    pub value: String,
}

impl InvalidCoordinate {
    pub fn new(axis: &'static str, value: impl Into<String>) -> Self {
        Self {
            axis,
            value: value.into(),
        }
    }
}

impl Display for InvalidCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} {:?}", self.axis, self.value)
    }
}

impl std::error::Error for InvalidCoordinate {}

/// Failures surfaced by a directory source.
#[derive(Debug)]
pub enum DirectoryError {
    /// The requested record does not exist.
    NotFound(u64),
    /// The collection could not be fetched; wraps the transport error.
    /// Retrying is owned by the caller, not this crate.
    Unavailable(DynError),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "user {} not found", id),
            Self::Unavailable(e) => write!(f, "directory unavailable: {}", e),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Unavailable(e) => Some(&**e),
        }
    }
}
