//! Path patterns and their segments.

/// One `/`-delimited component of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text, e.g. `users` in `/users/:id`.
    Literal(String),
    /// A named parameter bound to exactly one path component.
    Param(String),
    /// A trailing parameter capturing all remaining path components as an
    /// ordered sequence. Only valid as the last segment of a pattern.
    CatchAll(String),
}

impl Segment {
    /// The binding name this segment contributes, if any.
    #[must_use]
    pub fn binding(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Param(name) | Self::CatchAll(name) => Some(name),
        }
    }
}

/// An ordered, immutable sequence of pattern segments.
///
/// Invariant: a [`Segment::CatchAll`] appears at most once, and only as the
/// final segment. The invariant is enforced by construction —
/// [`PatternBuilder::catch_all`] consumes the builder and returns the
/// finished pattern, so nothing can be appended after it.
///
/// # Example
///
/// ```
/// use routegen_core::RoutePattern;
///
/// let pattern = RoutePattern::builder()
///     .literal("docs")
///     .catch_all("path");
///
/// assert!(pattern.has_catch_all());
/// assert_eq!(pattern.arity(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Start building a pattern.
    #[must_use]
    pub fn builder() -> PatternBuilder {
        PatternBuilder {
            segments: Vec::new(),
        }
    }

    /// The empty pattern, matching the root path `/`.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// The segments in pattern order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Binding names in pattern order.
    pub fn bindings(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::binding)
    }

    /// Number of call-time arguments the pattern requires.
    ///
    /// A catch-all counts as one argument (bound to a list of components).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.bindings().count()
    }

    /// Whether the pattern ends in a catch-all segment.
    #[must_use]
    pub fn has_catch_all(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::CatchAll(_)))
    }
}

/// Builder for [`RoutePattern`].
///
/// Segments are appended in order; `catch_all` finishes the pattern so the
/// trailing-position invariant cannot be violated.
#[derive(Debug, Clone)]
pub struct PatternBuilder {
    segments: Vec<Segment>,
}

impl PatternBuilder {
    /// Append a literal segment.
    #[must_use]
    pub fn literal(mut self, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Literal(text.into()));
        self
    }

    /// Append a named parameter segment.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment::Param(name.into()));
        self
    }

    /// Finish the pattern with a trailing catch-all segment.
    #[must_use]
    pub fn catch_all(mut self, name: impl Into<String>) -> RoutePattern {
        self.segments.push(Segment::CatchAll(name.into()));
        RoutePattern {
            segments: self.segments,
        }
    }

    /// Finish the pattern without a catch-all.
    #[must_use]
    pub fn build(self) -> RoutePattern {
        RoutePattern {
            segments: self.segments,
        }
    }
}
