//! XML namespace and element identity types.

use std::borrow::Cow;

/// `DAV:` namespace URI.
pub const DAV_NS: &str = "DAV:";

/// An XML namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(pub Cow<'static, str>);

impl Namespace {
    /// `DAV:` namespace.
    pub const DAV: Self = Self(Cow::Borrowed(DAV_NS));

    /// No namespace.
    pub const NONE: Self = Self(Cow::Borrowed(""));

    /// Creates a new namespace from a string.
    #[must_use]
    pub fn new(uri: impl Into<Cow<'static, str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Namespace {
    fn from(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }
}

impl From<String> for Namespace {
    fn from(s: String) -> Self {
        Self(Cow::Owned(s))
    }
}

/// An element identity: namespace URI plus local name.
///
/// Used as the key for every dispatch table and property map in the
/// crate. Equality is namespace + name, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// The namespace URI.
    pub namespace: Namespace,
    /// The local name.
    pub local_name: Cow<'static, str>,
}

impl Tag {
    /// Creates a new tag.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Creates a `DAV:` tag.
    #[must_use]
    pub fn dav(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::DAV,
            local_name: local_name.into(),
        }
    }

    /// Creates a tag with no namespace.
    #[must_use]
    pub fn unqualified(local_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: Namespace::NONE,
            local_name: local_name.into(),
        }
    }

    /// Returns the local name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Returns the namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_str()
    }

    /// Returns whether this is a `DAV:` element.
    #[must_use]
    pub fn is_dav(&self) -> bool {
        self.namespace == Namespace::DAV
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace.as_str(), self.local_name)
    }
}

/// The built-in DAV property tags.
pub mod dav_props {
    use super::Tag;

    pub fn displayname() -> Tag {
        Tag::dav("displayname")
    }
    pub fn getcontenttype() -> Tag {
        Tag::dav("getcontenttype")
    }
    pub fn getcontentlength() -> Tag {
        Tag::dav("getcontentlength")
    }
    pub fn getetag() -> Tag {
        Tag::dav("getetag")
    }
    pub fn getlastmodified() -> Tag {
        Tag::dav("getlastmodified")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_display() {
        let tag = Tag::dav("multistatus");
        assert_eq!(tag.to_string(), "{DAV:}multistatus");
    }

    #[test]
    fn tag_equality_is_namespace_and_name() {
        assert_eq!(Tag::dav("prop"), Tag::new("DAV:".to_string(), "prop"));
        assert_ne!(Tag::dav("prop"), Tag::unqualified("prop"));
    }

    #[test]
    fn tag_is_dav() {
        assert!(Tag::dav("href").is_dav());
        assert!(!Tag::new("urn:example", "href").is_dav());
    }
}
