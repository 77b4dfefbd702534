//! XML parse error types.

use std::fmt;

/// Result type for `WebDAV` XML parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while parsing a `WebDAV` XML document.
#[derive(Debug)]
pub struct ParseError {
    /// Error kind.
    pub kind: ParseErrorKind,
    /// Error message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates an XML error.
    #[must_use]
    pub fn xml(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::XmlError, message)
    }

    /// Creates an unexpected event error.
    #[must_use]
    pub fn unexpected_event(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::UnexpectedEvent, message)
    }

    /// Creates a premature end-of-document error.
    #[must_use]
    pub fn unexpected_eof(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::UnexpectedEof, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        Self::xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::new(ParseErrorKind::EncodingError, err.to_string())
    }
}

impl From<quick_xml::encoding::EncodingError> for ParseError {
    fn from(err: quick_xml::encoding::EncodingError) -> Self {
        Self::new(ParseErrorKind::EncodingError, err.to_string())
    }
}

impl From<quick_xml::escape::EscapeError> for ParseError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        Self::new(ParseErrorKind::EncodingError, err.to_string())
    }
}

/// Parse error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed XML.
    XmlError,
    /// Structurally valid XML in an unexpected place.
    UnexpectedEvent,
    /// The document ended inside an open element.
    UnexpectedEof,
    /// Text could not be decoded.
    EncodingError,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XmlError => write!(f, "XML error"),
            Self::UnexpectedEvent => write!(f, "unexpected event"),
            Self::UnexpectedEof => write!(f, "unexpected end of document"),
            Self::EncodingError => write!(f, "encoding error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::unexpected_eof("document ended inside multistatus");
        assert_eq!(
            err.to_string(),
            "unexpected end of document: document ended inside multistatus"
        );
    }

    #[test]
    fn error_kind_preserved() {
        let err = ParseError::unexpected_event("text outside any element");
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEvent);
    }
}
