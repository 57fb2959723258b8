//! Ahead-of-time route-helper compiler.
//!
//! routegen takes a declared route set — each route a path pattern of
//! literal and parameterized segments, bound to an action and an optional
//! helper name — and compiles it, once, into specialized path builders plus
//! a base-URL resolver. At call time nothing walks a route table: path
//! construction is string concatenation over pre-fused literals, and query
//! augmentation is filtering plus percent-encoding.
//!
//! # Quick Start
//!
//! ```
//! use routegen::prelude::*;
//!
//! let routes = vec![
//!     Route::new(
//!         "show",
//!         RoutePattern::builder().literal("users").param("id").build(),
//!     )
//!     .with_helper("user"),
//!     Route::new(
//!         "show",
//!         RoutePattern::builder().literal("docs").catch_all("path"),
//!     )
//!     .with_helper("docs"),
//! ];
//!
//! let helpers = HelperSet::build(routes).unwrap();
//!
//! assert_eq!(
//!     helpers.path("user", "show", &path_args![42]).unwrap(),
//!     "/users/42"
//! );
//! assert_eq!(
//!     helpers
//!         .path_with("user", "show", &path_args![42], [("tab", "posts")])
//!         .unwrap(),
//!     "/users/42?tab=posts"
//! );
//! assert_eq!(
//!     helpers
//!         .path("docs", "show", &[PathValue::rest(["guides", "intro"])])
//!         .unwrap(),
//!     "/docs/guides/intro"
//! );
//! ```
//!
//! # Design
//!
//! 1. **Specialize once** — templates are compiled per route at build time;
//!    helper signature collisions fail the build rather than overwrite
//! 2. **Pure at call time** — helpers and the URL resolver own no mutable
//!    state; the only memo is the explicit [`BaseUrlCache`]
//! 3. **Narrow collaborators** — the route source supplies [`Route`]
//!    values, configuration is read through [`ConfigProvider`]
//!
//! # Crate Structure
//!
//! - [`routegen_core`] — route and pattern data model
//! - [`routegen_helpers`] — compiled templates and the helper registry
//! - [`routegen_url`] — query encoding and base-URL resolution

#![forbid(unsafe_code)]

// Re-export crates
pub use routegen_core as core;
pub use routegen_helpers as helpers;
pub use routegen_url as url;

// Re-export commonly used types
pub use routegen_core::{PathValue, PatternBuilder, ReservedKeys, Route, RoutePattern, Segment};
pub use routegen_helpers::{
    Helper, HelperConflict, HelperSet, Op, PathError, PathTemplate, RenderError, join_path,
    path_args,
};
pub use routegen_url::{
    BaseUrl, BaseUrlCache, ConfigProvider, JsonConfig, Section, StaticConfig, UrlConfigError,
    append_query, append_query_json, encode_query, percent_encode, resolve_base_url,
};

use std::fmt;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        BaseUrl, BaseUrlCache, ConfigProvider, FullUrlExt, Helper, HelperConflict, HelperSet,
        PathError, PathValue, ReservedKeys, Route, RoutePattern, Section, StaticConfig, UrlError,
        append_query, path_args, resolve_base_url,
    };
    pub use serde::{Deserialize, Serialize};
}

/// Errors from building a full URL: helper lookup/render or configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The helper call failed.
    Path(PathError),
    /// Base-URL resolution failed.
    Config(UrlConfigError),
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for UrlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Path(err) => Some(err),
            Self::Config(err) => Some(err),
        }
    }
}

impl From<PathError> for UrlError {
    fn from(err: PathError) -> Self {
        Self::Path(err)
    }
}

impl From<UrlConfigError> for UrlError {
    fn from(err: UrlConfigError) -> Self {
        Self::Config(err)
    }
}

/// Extension trait joining helper paths with the cached base URL.
///
/// # Example
///
/// ```
/// use routegen::prelude::*;
///
/// let helpers = HelperSet::build([Route::new(
///     "show",
///     RoutePattern::builder().literal("users").param("id").build(),
/// )
/// .with_helper("user")])
/// .unwrap();
///
/// let cache = BaseUrlCache::new();
/// let config = StaticConfig::new()
///     .with_section("url", Section::new().with_host("example.com"));
///
/// let url = helpers
///     .full_url(&cache, &config, "user", "show", &path_args![42])
///     .unwrap();
/// assert_eq!(url, "http://example.com/users/42");
/// ```
pub trait FullUrlExt {
    /// Render a helper path and prepend the resolved base URL.
    fn full_url<C>(
        &self,
        cache: &BaseUrlCache,
        config: &C,
        helper: &str,
        action: &str,
        args: &[PathValue],
    ) -> Result<String, UrlError>
    where
        C: ConfigProvider + ?Sized;
}

impl FullUrlExt for HelperSet {
    fn full_url<C>(
        &self,
        cache: &BaseUrlCache,
        config: &C,
        helper: &str,
        action: &str,
        args: &[PathValue],
    ) -> Result<String, UrlError>
    where
        C: ConfigProvider + ?Sized,
    {
        let path = self.path(helper, action, args)?;
        Ok(cache.build_url(config, &path)?)
    }
}
