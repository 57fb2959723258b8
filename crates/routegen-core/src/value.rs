//! Call-time values bound to pattern parameters.

use std::fmt;

/// A value supplied for one pattern binding when a helper is called.
///
/// Scalar bindings take [`PathValue::Segment`]; a trailing catch-all takes
/// [`PathValue::Rest`], an ordered sequence of path components. Values are
/// converted to their string form unconditionally — this crate does not
/// validate value shape, that is the route source's responsibility.
///
/// Any `Display` type converts into the scalar form:
///
/// ```
/// use routegen_core::PathValue;
///
/// let id = PathValue::from(42);
/// assert_eq!(id, PathValue::Segment("42".to_string()));
///
/// let rest = PathValue::rest(["a", "b", "c"]);
/// assert_eq!(
///     rest,
///     PathValue::Rest(vec!["a".into(), "b".into(), "c".into()])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    /// A single path component.
    Segment(String),
    /// The remaining path components, joined with `/` when rendered.
    Rest(Vec<String>),
}

impl PathValue {
    /// Build the catch-all form from a sequence of components.
    pub fn rest<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: fmt::Display,
    {
        Self::Rest(values.into_iter().map(|v| v.to_string()).collect())
    }
}

// Relies on `PathValue` itself not implementing `Display`, which keeps this
// blanket impl coherent with the reflexive `From<T> for T`.
impl<T: fmt::Display> From<T> for PathValue {
    fn from(value: T) -> Self {
        Self::Segment(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_types_convert_to_segments() {
        assert_eq!(PathValue::from("abc"), PathValue::Segment("abc".into()));
        assert_eq!(PathValue::from(7u64), PathValue::Segment("7".into()));
        assert_eq!(PathValue::from(-3i32), PathValue::Segment("-3".into()));
    }

    #[test]
    fn rest_preserves_component_order() {
        let value = PathValue::rest([1, 2, 3]);
        assert_eq!(
            value,
            PathValue::Rest(vec!["1".into(), "2".into(), "3".into()])
        );
    }

    #[test]
    fn rest_of_nothing_is_empty() {
        assert_eq!(PathValue::rest(Vec::<String>::new()), PathValue::Rest(vec![]));
    }
}
