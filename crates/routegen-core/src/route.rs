//! Route declarations and reserved key sets.

use crate::pattern::RoutePattern;

/// A declarative mapping from an action tag to a path pattern, optionally
/// named for helper generation.
///
/// Binding names are derived from the pattern, so they are always consistent
/// with segment order. A route without a helper name contributes no emitted
/// helper; that is a skip, not an error.
///
/// # Example
///
/// ```
/// use routegen_core::{Route, RoutePattern};
///
/// let route = Route::new(
///     "show",
///     RoutePattern::builder().literal("users").param("id").build(),
/// )
/// .with_helper("user");
///
/// assert_eq!(route.action(), "show");
/// assert_eq!(route.helper(), Some("user"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    helper: Option<String>,
    action: String,
    pattern: RoutePattern,
}

impl Route {
    /// Create an unnamed route for an action.
    #[must_use]
    pub fn new(action: impl Into<String>, pattern: RoutePattern) -> Self {
        Self {
            helper: None,
            action: action.into(),
            pattern,
        }
    }

    /// Name the route for helper generation.
    #[must_use]
    pub fn with_helper(mut self, name: impl Into<String>) -> Self {
        self.helper = Some(name.into());
        self
    }

    /// The helper name, if the route is addressable by helper.
    #[must_use]
    pub fn helper(&self) -> Option<&str> {
        self.helper.as_deref()
    }

    /// The action tag.
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The path pattern.
    #[must_use]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// The set of binding names that query parameters must not shadow.
    #[must_use]
    pub fn reserved_keys(&self) -> ReservedKeys {
        ReservedKeys::from_names(self.pattern.bindings())
    }
}

/// The binding names of a route, in pattern order.
///
/// Query parameters whose key matches a reserved name are dropped rather
/// than merged, so a path parameter can never be overridden from the query
/// string. Routes bind a handful of names at most, so membership is a
/// linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedKeys {
    names: Vec<String>,
}

impl ReservedKeys {
    /// Build a set from binding names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// An empty set (no keys are reserved).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `key` is reserved.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.names.iter().any(|name| name == key)
    }

    /// Number of reserved names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names are reserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::RoutePattern;

    #[test]
    fn unnamed_route_has_no_helper() {
        let route = Route::new("index", RoutePattern::root());
        assert_eq!(route.helper(), None);
    }

    #[test]
    fn reserved_keys_come_from_pattern_bindings() {
        let route = Route::new(
            "show",
            RoutePattern::builder()
                .literal("orgs")
                .param("org_id")
                .literal("repos")
                .param("repo_id")
                .build(),
        );
        let reserved = route.reserved_keys();
        assert_eq!(reserved.len(), 2);
        assert!(reserved.contains("org_id"));
        assert!(reserved.contains("repo_id"));
        assert!(!reserved.contains("page"));
    }

    #[test]
    fn catch_all_name_is_reserved() {
        let route = Route::new(
            "show",
            RoutePattern::builder().literal("docs").catch_all("path"),
        );
        assert!(route.reserved_keys().contains("path"));
    }

    #[test]
    fn empty_set_contains_nothing() {
        let reserved = ReservedKeys::empty();
        assert!(reserved.is_empty());
        assert!(!reserved.contains("anything"));
    }
}
