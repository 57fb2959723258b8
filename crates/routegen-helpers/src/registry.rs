//! The compiled helper registry.
//!
//! [`HelperSet::build`] is the Helper Emitter: each route with a helper name
//! is compiled exactly once and registered under its
//! `(helper, action, arity)` signature. Helper names form one flat
//! namespace, so a signature collision is a fatal build error — overwriting
//! would hide a routing ambiguity. Routes without a helper name are skipped
//! silently.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use routegen_core::{PathValue, ReservedKeys, Route};
use routegen_url::append_query;

use crate::template::{PathTemplate, RenderError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HelperKey {
    helper: String,
    action: String,
    arity: usize,
}

/// One compiled route helper: the template plus the route's reserved keys.
///
/// This is the "generated callable" form — immutable, created once per
/// build, pure at call time.
#[derive(Debug, Clone)]
pub struct Helper {
    template: PathTemplate,
    reserved: ReservedKeys,
}

impl Helper {
    /// Render the path for exactly the bound parameters.
    pub fn path(&self, args: &[PathValue]) -> Result<String, RenderError> {
        self.template.render(args)
    }

    /// Render the path, then append unreserved extra parameters as a query
    /// string.
    ///
    /// Extra keys that collide with the route's own binding names are
    /// dropped silently; with no surviving extras this equals
    /// [`path`](Self::path).
    pub fn path_with<I, K, V>(&self, args: &[PathValue], extra: I) -> Result<String, RenderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        let path = self.template.render(args)?;
        Ok(append_query(&path, extra, &self.reserved))
    }

    /// The compiled template.
    #[must_use]
    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    /// The route's reserved query keys.
    #[must_use]
    pub fn reserved_keys(&self) -> &ReservedKeys {
        &self.reserved
    }
}

/// All helpers generated from a route set, keyed by
/// `(helper, action, arity)`.
///
/// # Example
///
/// ```
/// use routegen_core::{Route, RoutePattern};
/// use routegen_helpers::{HelperSet, path_args};
///
/// let helpers = HelperSet::build([
///     Route::new(
///         "show",
///         RoutePattern::builder().literal("users").param("id").build(),
///     )
///     .with_helper("user"),
///     Route::new("health", RoutePattern::builder().literal("up").build()),
/// ])
/// .unwrap();
///
/// // The unnamed route contributed nothing.
/// assert_eq!(helpers.len(), 1);
/// assert_eq!(
///     helpers.path("user", "show", &path_args![42]).unwrap(),
///     "/users/42"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct HelperSet {
    helpers: HashMap<HelperKey, Helper>,
}

impl HelperSet {
    /// Compile every named route into the registry.
    ///
    /// # Errors
    ///
    /// [`HelperConflict`] when two routes collide on
    /// `(helper, action, arity)`. The whole build fails; no partial set is
    /// returned.
    pub fn build<I>(routes: I) -> Result<Self, HelperConflict>
    where
        I: IntoIterator<Item = Route>,
    {
        let mut helpers = HashMap::new();
        for route in routes {
            let Some(name) = route.helper() else {
                continue;
            };
            let template = PathTemplate::compile(route.pattern());
            let key = HelperKey {
                helper: name.to_string(),
                action: route.action().to_string(),
                arity: template.arity(),
            };
            match helpers.entry(key) {
                Entry::Occupied(existing) => {
                    let key = existing.key();
                    return Err(HelperConflict {
                        helper: key.helper.clone(),
                        action: key.action.clone(),
                        arity: key.arity,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(Helper {
                        template,
                        reserved: route.reserved_keys(),
                    });
                }
            }
        }
        Ok(Self { helpers })
    }

    /// Look up the compiled helper for a signature.
    #[must_use]
    pub fn get(&self, helper: &str, action: &str, arity: usize) -> Option<&Helper> {
        self.helpers.get(&HelperKey {
            helper: helper.to_string(),
            action: action.to_string(),
            arity,
        })
    }

    /// Render a path with exactly the bound parameters.
    ///
    /// Equivalent to [`path_with`](Self::path_with) with empty extras.
    pub fn path(
        &self,
        helper: &str,
        action: &str,
        args: &[PathValue],
    ) -> Result<String, PathError> {
        Ok(self.lookup(helper, action, args.len())?.path(args)?)
    }

    /// Render a path and append unreserved extra parameters as a query
    /// string.
    pub fn path_with<I, K, V>(
        &self,
        helper: &str,
        action: &str,
        args: &[PathValue],
        extra: I,
    ) -> Result<String, PathError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        Ok(self.lookup(helper, action, args.len())?.path_with(args, extra)?)
    }

    /// Number of compiled helpers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Whether no route contributed a helper.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }

    fn lookup(&self, helper: &str, action: &str, arity: usize) -> Result<&Helper, PathError> {
        self.get(helper, action, arity)
            .ok_or_else(|| PathError::UnknownHelper {
                helper: helper.to_string(),
                action: action.to_string(),
                arity,
            })
    }
}

/// Fatal build-time collision on a helper signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperConflict {
    /// The colliding helper name.
    pub helper: String,
    /// The colliding action tag.
    pub action: String,
    /// The colliding arity.
    pub arity: usize,
}

impl fmt::Display for HelperConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "helper {}/{} with {} parameter(s) is declared by more than one route",
            self.helper, self.action, self.arity
        )
    }
}

impl std::error::Error for HelperConflict {}

/// Call-time errors from the registry surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// No helper is registered under the signature.
    UnknownHelper {
        /// Requested helper name.
        helper: String,
        /// Requested action tag.
        action: String,
        /// Arity implied by the argument count.
        arity: usize,
    },
    /// The helper was found but the arguments did not fit its pattern.
    Render(RenderError),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownHelper {
                helper,
                action,
                arity,
            } => write!(
                f,
                "no helper {helper}/{action} taking {arity} parameter(s)"
            ),
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownHelper { .. } => None,
            Self::Render(err) => Some(err),
        }
    }
}

impl From<RenderError> for PathError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
