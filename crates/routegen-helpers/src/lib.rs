//! Ahead-of-time compiled route helpers.
//!
//! This crate turns route declarations into specialized path builders,
//! once, at build time:
//!
//! - [`PathTemplate`] — the Segment Optimizer. Compiles a pattern into a
//!   minimal op list with all adjacent literals (and their `/` separators)
//!   fused into single strings, so rendering cost is proportional to the
//!   number of dynamic segments only.
//! - [`HelperSet`] — the helper registry. Compiles every named route,
//!   detects `(helper, action, arity)` collisions as a fatal build error,
//!   and exposes the two per-route entry points: path-only and
//!   path-plus-query-extras.
//!
//! Generation runs once, single-threaded; the compiled set is immutable and
//! every call-time operation is a pure function of its arguments.
//!
//! # Example
//!
//! ```
//! use routegen_core::{Route, RoutePattern};
//! use routegen_helpers::{HelperSet, path_args};
//!
//! let routes = vec![
//!     Route::new(
//!         "show",
//!         RoutePattern::builder().literal("users").param("id").build(),
//!     )
//!     .with_helper("user"),
//! ];
//!
//! let helpers = HelperSet::build(routes).unwrap();
//! let path = helpers.path("user", "show", &path_args![42]).unwrap();
//! assert_eq!(path, "/users/42");
//!
//! let with_query = helpers
//!     .path_with("user", "show", &path_args![42], [("tab", "posts")])
//!     .unwrap();
//! assert_eq!(with_query, "/users/42?tab=posts");
//! ```

#![forbid(unsafe_code)]

mod registry;
mod template;

pub use registry::{Helper, HelperConflict, HelperSet, PathError};
pub use template::{Op, PathTemplate, RenderError, join_path};

// Re-exported for the `path_args!` macro and for call sites that only
// depend on this crate.
pub use routegen_core::PathValue;

/// Build a `Vec<PathValue>` from display-able scalar arguments.
///
/// Catch-all routes take their final argument as
/// [`PathValue::rest`](routegen_core::PathValue::rest) explicitly.
///
/// # Example
///
/// ```
/// use routegen_helpers::{PathValue, path_args};
///
/// let args = path_args![42, "active"];
/// assert_eq!(
///     args,
///     vec![
///         PathValue::Segment("42".into()),
///         PathValue::Segment("active".into()),
///     ]
/// );
/// assert!(path_args![].is_empty());
/// ```
#[macro_export]
macro_rules! path_args {
    () => {
        ::std::vec::Vec::<$crate::PathValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::PathValue::from($value)),+]
    };
}
