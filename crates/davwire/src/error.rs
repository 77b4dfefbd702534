use thiserror::Error;

/// Codec errors: parse failures and serializer failures.
#[derive(Error, Debug)]
pub enum DavError {
    #[error("parse error: {0}")]
    Parse(#[from] crate::parse::ParseError),

    #[error("XML write error: {0}")]
    Write(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("generated document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type DavResult<T> = std::result::Result<T, DavError>;
