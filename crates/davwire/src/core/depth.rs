//! Search scope depth values.

use std::fmt;

/// Depth of a search `scope`.
///
/// `WebDAV` uses the literal token `infinity` for "the resource and all
/// descendants"; any other depth is a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// The resource and all descendants.
    #[default]
    Infinity,
    /// An exact recursion depth.
    Finite(u32),
}

impl Depth {
    /// Parses a depth token.
    #[must_use]
    pub fn from_token(value: &str) -> Option<Self> {
        match value.trim() {
            "infinity" => Some(Self::Infinity),
            other => other.parse().ok().map(Self::Finite),
        }
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => f.write_str("infinity"),
            Self::Finite(n) => write!(f, "{n}"),
        }
    }
}

impl std::str::FromStr for Depth {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or(())
    }
}
