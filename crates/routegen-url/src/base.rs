//! Process-wide cached base URL.

use parking_lot::RwLock;

use crate::config::ConfigProvider;
use crate::resolver::{UrlConfigError, resolve_base_url};

/// Memoizes the rendered base URL for the process lifetime.
///
/// The first successful [`build_url`](Self::build_url) (or
/// [`base_url`](Self::base_url)) call resolves and caches the base URL;
/// later calls reuse it without touching the provider until
/// [`invalidate`](Self::invalidate) clears the memo. Resolution failures are
/// not cached.
///
/// The constructor is `const`, so a cache can live in a `static`:
///
/// ```
/// use routegen_url::{BaseUrlCache, Section, StaticConfig};
///
/// static BASE_URL: BaseUrlCache = BaseUrlCache::new();
///
/// let config = StaticConfig::new()
///     .with_section("url", Section::new().with_host("example.com"));
/// let url = BASE_URL.build_url(&config, "/users/42").unwrap();
/// assert_eq!(url, "http://example.com/users/42");
/// ```
#[derive(Debug, Default)]
pub struct BaseUrlCache {
    cached: RwLock<Option<String>>,
}

impl BaseUrlCache {
    /// An empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cached: RwLock::new(None),
        }
    }

    /// The rendered base URL, resolving and caching it on first use.
    ///
    /// # Errors
    ///
    /// Propagates [`UrlConfigError`] from resolution when the cache is cold.
    pub fn base_url<C>(&self, config: &C) -> Result<String, UrlConfigError>
    where
        C: ConfigProvider + ?Sized,
    {
        if let Some(base) = self.cached.read().as_deref() {
            return Ok(base.to_string());
        }
        let resolved = resolve_base_url(config)?.to_string();
        let mut slot = self.cached.write();
        // A racing caller may have filled the slot; first write wins.
        Ok(slot.get_or_insert(resolved).clone())
    }

    /// Concatenate the cached base URL with `path`.
    ///
    /// # Errors
    ///
    /// Propagates [`UrlConfigError`] from resolution when the cache is cold.
    pub fn build_url<C>(&self, config: &C, path: &str) -> Result<String, UrlConfigError>
    where
        C: ConfigProvider + ?Sized,
    {
        let mut url = self.base_url(config)?;
        url.push_str(path);
        Ok(url)
    }

    /// Clear the memo so the next call re-resolves from configuration.
    pub fn invalidate(&self) {
        *self.cached.write() = None;
    }
}
