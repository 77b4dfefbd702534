//! Write-side request models: `propfind` and `searchrequest`.

use super::depth::Depth;
use super::namespace::Tag;

/// A `PROPFIND` request body: the property tags to ask for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropFind {
    /// Requested property tags, emitted as bare empty elements.
    pub props: Vec<Tag>,
}

impl PropFind {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property tag to request.
    #[must_use]
    pub fn prop(mut self, tag: Tag) -> Self {
        self.props.push(tag);
        self
    }
}

/// A search scope: an href and how deep to recurse below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// The collection href the search starts from.
    pub href: String,
    /// Recursion depth; `None` serializes as `infinity`.
    pub depth: Option<Depth>,
}

impl Scope {
    /// Creates a scope with unset depth.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            depth: None,
        }
    }

    /// Sets the recursion depth.
    #[must_use]
    pub fn depth(mut self, depth: Depth) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Returns the wire token for this scope's depth.
    #[must_use]
    pub fn depth_token(&self) -> String {
        self.depth.unwrap_or_default().to_string()
    }
}

/// A DASL filter expression.
///
/// Leaves compare one property tag against a literal; interior nodes
/// combine child expressions. `Not` holds exactly one child by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// All children must match.
    And(Vec<Expr>),
    /// Any child must match.
    Or(Vec<Expr>),
    /// The child must not match.
    Not(Box<Expr>),
    /// Property equals the literal.
    Eq(Tag, String),
    /// Property is less than the literal.
    Lt(Tag, String),
    /// Property is greater than the literal.
    Gt(Tag, String),
    /// Property is less than or equal to the literal.
    Lte(Tag, String),
    /// Property is greater than or equal to the literal.
    Gte(Tag, String),
    /// Property matches the literal pattern.
    Like(Tag, String),
}

impl Expr {
    /// Builds an `and` over `children`.
    #[must_use]
    pub fn and(children: Vec<Expr>) -> Self {
        Self::And(children)
    }

    /// Builds an `or` over `children`.
    #[must_use]
    pub fn or(children: Vec<Expr>) -> Self {
        Self::Or(children)
    }

    /// Negates `child`.
    #[must_use]
    pub fn not(child: Expr) -> Self {
        Self::Not(Box::new(child))
    }

    /// Builds an equality comparison.
    #[must_use]
    pub fn eq(prop: Tag, literal: impl Into<String>) -> Self {
        Self::Eq(prop, literal.into())
    }

    /// Builds a less-than comparison.
    #[must_use]
    pub fn lt(prop: Tag, literal: impl Into<String>) -> Self {
        Self::Lt(prop, literal.into())
    }

    /// Builds a greater-than comparison.
    #[must_use]
    pub fn gt(prop: Tag, literal: impl Into<String>) -> Self {
        Self::Gt(prop, literal.into())
    }

    /// Builds a less-than-or-equal comparison.
    #[must_use]
    pub fn lte(prop: Tag, literal: impl Into<String>) -> Self {
        Self::Lte(prop, literal.into())
    }

    /// Builds a greater-than-or-equal comparison.
    #[must_use]
    pub fn gte(prop: Tag, literal: impl Into<String>) -> Self {
        Self::Gte(prop, literal.into())
    }

    /// Builds a pattern-match comparison.
    #[must_use]
    pub fn like(prop: Tag, literal: impl Into<String>) -> Self {
        Self::Like(prop, literal.into())
    }
}

/// The query shape of the `WebDAV` SEARCH method: selected properties,
/// scopes, and an optional filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasicSearch {
    /// Property tags for the `select` clause.
    pub select: Vec<Tag>,
    /// Scopes for the `from` clause.
    pub from: Vec<Scope>,
    /// Filter for the `where` clause.
    pub filter: Option<Expr>,
}

impl BasicSearch {
    /// Creates an empty search.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property tag to the `select` clause.
    #[must_use]
    pub fn select(mut self, tag: Tag) -> Self {
        self.select.push(tag);
        self
    }

    /// Adds a scope to the `from` clause.
    #[must_use]
    pub fn scope(mut self, scope: Scope) -> Self {
        self.from.push(scope);
        self
    }

    /// Sets the `where` clause.
    #[must_use]
    pub fn filter(mut self, expr: Expr) -> Self {
        self.filter = Some(expr);
        self
    }
}

/// A `SEARCH` request body wrapping one basic search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// The query.
    pub search: BasicSearch,
}

impl SearchRequest {
    /// Wraps a basic search.
    #[must_use]
    pub fn new(search: BasicSearch) -> Self {
        Self { search }
    }
}
