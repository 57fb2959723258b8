//! Configuration lookup contract.
//!
//! Base-URL resolution reads three optional sections out of externally owned
//! configuration: `https` and `http` (listener settings) and `url` (explicit
//! external URL settings). The [`ConfigProvider`] trait is that lookup
//! contract — this crate never stores or validates configuration itself, and
//! an absent section is a valid, non-error state.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One configuration section with the recognized keys.
///
/// Unrecognized keys in the underlying storage are ignored; every field is
/// optional at this level, requiredness is the resolver's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    /// URL scheme, e.g. `https`.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Externally visible host name.
    #[serde(default)]
    pub host: Option<String>,
    /// TCP port.
    #[serde(default)]
    pub port: Option<u16>,
}

impl Section {
    /// An empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

/// Key-based configuration lookup.
///
/// Recognized keys are `https`, `http`, and `url`. Implementations must
/// return a consistent snapshot per call; no atomicity is assumed across
/// calls.
pub trait ConfigProvider {
    /// Look up a configuration section by key.
    fn section(&self, key: &str) -> Option<Section>;
}

/// An in-memory [`ConfigProvider`] backed by a map.
///
/// Useful as a test fixture and for embedders whose configuration is already
/// materialized.
///
/// # Example
///
/// ```
/// use routegen_url::{ConfigProvider, Section, StaticConfig};
///
/// let config = StaticConfig::new()
///     .with_section("https", Section::new().with_port(8443))
///     .with_section("url", Section::new().with_host("example.com"));
///
/// assert!(config.section("https").is_some());
/// assert!(config.section("http").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    sections: HashMap<String, Section>,
}

impl StaticConfig {
    /// An empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a section.
    #[must_use]
    pub fn with_section(mut self, key: impl Into<String>, section: Section) -> Self {
        self.sections.insert(key.into(), section);
        self
    }
}

impl ConfigProvider for StaticConfig {
    fn section(&self, key: &str) -> Option<Section> {
        self.sections.get(key).cloned()
    }
}

/// A [`ConfigProvider`] reading sections out of a JSON document.
///
/// Each section is deserialized on lookup; a section that is missing or not
/// an object with the recognized shape reads as absent.
///
/// # Example
///
/// ```
/// use routegen_url::{ConfigProvider, JsonConfig};
/// use serde_json::json;
///
/// let config = JsonConfig::new(json!({
///     "http": {"port": 4000},
///     "url": {"host": "example.com"},
/// }));
///
/// assert_eq!(config.section("http").unwrap().port, Some(4000));
/// ```
#[derive(Debug, Clone)]
pub struct JsonConfig {
    root: Value,
}

impl JsonConfig {
    /// Wrap a JSON document.
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }
}

impl ConfigProvider for JsonConfig {
    fn section(&self, key: &str) -> Option<Section> {
        let value = self.root.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }
}
