//! Error types for flatfile
//!
//! Every store operation reports failures through [`FlatError`], a flat
//! triple of kind, originating component and message. Typed getters report
//! conversion failures through [`ValueError`].

use std::fmt;

use thiserror::Error;

/// Result type alias using FlatError
pub type Result<T> = std::result::Result<T, FlatError>;

/// The category of a [`FlatError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The file contents could not be parsed
    Parsing,

    /// An invalid argument was passed to the operation
    InvalidArgument,

    /// The requested element does not exist
    NotFound,

    /// The element to add already exists
    AlreadyExists,

    /// Writing the file failed
    Saving,

    /// Reading the file failed
    Loading,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ErrorKind::Parsing => "Parsing Error",
            ErrorKind::InvalidArgument => "Invalid Argument",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::AlreadyExists => "Already Exists",
            ErrorKind::Saving => "Saving Error",
            ErrorKind::Loading => "Loading Error",
        };
        f.write_str(text)
    }
}

/// Error returned by the settings and spreadsheet stores
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}[{component}]: {message}")]
pub struct FlatError {
    kind: ErrorKind,
    component: &'static str,
    message: String,
}

impl FlatError {
    pub fn new(kind: ErrorKind, component: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            component,
            message: message.into(),
        }
    }

    pub fn parsing(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parsing, component, message)
    }

    pub fn invalid_argument(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, component, message)
    }

    pub fn not_found(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, component, message)
    }

    pub fn already_exists(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, component, message)
    }

    pub fn saving(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Saving, component, message)
    }

    pub fn loading(component: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Loading, component, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the store that raised the error
    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A stored value could not be converted to the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {value:?} to {target}: {reason}")]
pub struct ValueError {
    /// The stored text
    pub value: String,

    /// Name of the requested type
    pub target: &'static str,

    /// Reason reported by the parser
    pub reason: String,
}

/// Parse `value` as `T`, naming `target` in the error
pub(crate) fn convert<T>(value: &str, target: &'static str) -> std::result::Result<T, ValueError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|e| ValueError {
        value: value.to_string(),
        target,
        reason: e.to_string(),
    })
}
