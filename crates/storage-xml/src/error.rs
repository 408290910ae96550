//! Error types for the storage-xml crate

use thiserror::Error;

/// Result type alias using `XmlError`
pub type Result<T> = std::result::Result<T, XmlError>;

/// Errors that can occur while writing structured output
#[derive(Error, Debug)]
pub enum XmlError {
    /// I/O error from the underlying sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The XML writer rejected an event
    #[error("XML write error: {0}")]
    Write(String),

    /// Attribute added with no tag open to receive it
    #[error("no open tag for attribute: {attribute}")]
    NoOpenTag { attribute: String },

    /// Close requested with nothing open
    #[error("close_tag called with no open tag")]
    UnbalancedClose,

    /// Document finished while tags were still open
    #[error("{0} tag(s) still open")]
    UnclosedTags(usize),

    /// Indentation must be a single-byte character
    #[error("indent character must be ASCII, got {0:?}")]
    InvalidIndent(char),

    /// Rendered output was not valid UTF-8
    #[error("invalid UTF-8 in output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl XmlError {
    /// Wrap any writer failure
    pub(crate) fn write(err: impl std::fmt::Display) -> Self {
        Self::Write(err.to_string())
    }
}
