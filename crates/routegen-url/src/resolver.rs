//! Base-URL resolution.
//!
//! Computes the canonical external base URL (scheme, host, port) in a single
//! pass over layered configuration:
//!
//! 1. An `https` listener section, if present, makes the candidate
//!    `("https", its port)`; else an `http` section makes it
//!    `("http", its port)`; else the candidate is `("http", 80)`.
//! 2. Explicit `url` settings override the candidate's scheme and port when
//!    set, and must supply the host — there is no hostname fallback.
//! 3. Rendering elides the port when it is the scheme's default
//!    (`https`/443, `http`/80).
//!
//! The result is a pure function of the configuration snapshot at call time;
//! memoization lives in [`BaseUrlCache`](crate::BaseUrlCache), not here.

use std::fmt;

use crate::config::ConfigProvider;

/// Default port for the `https` scheme.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Default port for the `http` scheme.
pub const HTTP_DEFAULT_PORT: u16 = 80;

/// The resolved scheme/host/port triple.
///
/// `Display` renders `scheme://host`, appending `:port` only when the port
/// is not the scheme's default.
///
/// # Example
///
/// ```
/// use routegen_url::BaseUrl;
///
/// let base = BaseUrl {
///     scheme: "http".into(),
///     host: "example.com".into(),
///     port: 4000,
/// };
/// assert_eq!(base.to_string(), "http://example.com:4000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    /// URL scheme.
    pub scheme: String,
    /// Host name.
    pub host: String,
    /// Port, possibly the scheme default.
    pub port: u16,
}

impl BaseUrl {
    /// Whether the port is the default for the scheme and can be elided.
    #[must_use]
    pub fn is_default_port(&self) -> bool {
        matches!(
            (self.scheme.as_str(), self.port),
            ("https", HTTPS_DEFAULT_PORT) | ("http", HTTP_DEFAULT_PORT)
        )
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default_port() {
            write!(f, "{}://{}", self.scheme, self.host)
        } else {
            write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

/// Errors from base-URL resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlConfigError {
    /// The `url` section is absent or does not supply a host.
    MissingHost,
}

impl fmt::Display for UrlConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHost => write!(f, "url configuration is missing required host"),
        }
    }
}

impl std::error::Error for UrlConfigError {}

/// Resolve the external base URL from a configuration snapshot.
///
/// # Errors
///
/// [`UrlConfigError::MissingHost`] when the `url` section is absent or has
/// no `host` — the host is required and fails fast.
pub fn resolve_base_url<C>(config: &C) -> Result<BaseUrl, UrlConfigError>
where
    C: ConfigProvider + ?Sized,
{
    let (mut scheme, mut port) = if let Some(listener) = config.section("https") {
        ("https".to_string(), listener.port.unwrap_or(HTTPS_DEFAULT_PORT))
    } else if let Some(listener) = config.section("http") {
        ("http".to_string(), listener.port.unwrap_or(HTTP_DEFAULT_PORT))
    } else {
        ("http".to_string(), HTTP_DEFAULT_PORT)
    };

    let url = config.section("url").ok_or(UrlConfigError::MissingHost)?;
    let host = url.host.ok_or(UrlConfigError::MissingHost)?;
    if let Some(explicit) = url.scheme {
        scheme = explicit;
    }
    if let Some(explicit) = url.port {
        port = explicit;
    }

    Ok(BaseUrl { scheme, host, port })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Section, StaticConfig};

    fn with_url_host(config: StaticConfig) -> StaticConfig {
        config.with_section("url", Section::new().with_host("example.com"))
    }

    #[test]
    fn http_default_port_is_elided() {
        let config = with_url_host(
            StaticConfig::new().with_section("http", Section::new().with_port(80)),
        );
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "http://example.com"
        );
    }

    #[test]
    fn https_default_port_is_elided() {
        let config = with_url_host(
            StaticConfig::new().with_section("https", Section::new().with_port(443)),
        );
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "https://example.com"
        );
    }

    #[test]
    fn non_default_port_is_rendered() {
        let config = with_url_host(
            StaticConfig::new().with_section("http", Section::new().with_port(4000)),
        );
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "http://example.com:4000"
        );
    }

    #[test]
    fn https_listener_wins_over_http() {
        let config = with_url_host(
            StaticConfig::new()
                .with_section("https", Section::new().with_port(8443))
                .with_section("http", Section::new().with_port(8080)),
        );
        let base = resolve_base_url(&config).unwrap();
        assert_eq!(base.scheme, "https");
        assert_eq!(base.port, 8443);
    }

    #[test]
    fn listener_without_port_uses_scheme_default() {
        let config =
            with_url_host(StaticConfig::new().with_section("https", Section::new()));
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "https://example.com"
        );
    }

    #[test]
    fn no_listener_defaults_to_http_80() {
        let config = with_url_host(StaticConfig::new());
        let base = resolve_base_url(&config).unwrap();
        assert_eq!(base.scheme, "http");
        assert_eq!(base.port, 80);
        assert_eq!(base.to_string(), "http://example.com");
    }

    #[test]
    fn url_section_overrides_scheme_and_port() {
        let config = StaticConfig::new()
            .with_section("http", Section::new().with_port(4000))
            .with_section(
                "url",
                Section::new()
                    .with_scheme("https")
                    .with_host("example.com")
                    .with_port(443),
            );
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "https://example.com"
        );
    }

    #[test]
    fn url_port_override_keeps_inferred_scheme() {
        let config = StaticConfig::new()
            .with_section("https", Section::new().with_port(443))
            .with_section(
                "url",
                Section::new().with_host("example.com").with_port(8443),
            );
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "https://example.com:8443"
        );
    }

    #[test]
    fn missing_url_section_fails_fast() {
        let config = StaticConfig::new().with_section("http", Section::new().with_port(80));
        assert_eq!(
            resolve_base_url(&config),
            Err(UrlConfigError::MissingHost)
        );
    }

    #[test]
    fn url_section_without_host_fails_fast() {
        let config = StaticConfig::new().with_section("url", Section::new().with_port(8080));
        assert_eq!(
            resolve_base_url(&config),
            Err(UrlConfigError::MissingHost)
        );
    }

    #[test]
    fn custom_scheme_never_elides_port() {
        // Only https/443 and http/80 are elided.
        let config = StaticConfig::new().with_section(
            "url",
            Section::new()
                .with_scheme("ws")
                .with_host("example.com")
                .with_port(80),
        );
        assert_eq!(
            resolve_base_url(&config).unwrap().to_string(),
            "ws://example.com:80"
        );
    }
}
