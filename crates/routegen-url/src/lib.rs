//! Query encoding and base-URL resolution for routegen.
//!
//! This crate owns the two request-time-facing pieces of the route-helper
//! compiler that are not path templates:
//!
//! - Query appending: filter out reserved path-parameter names, percent-encode
//!   the rest per RFC 3986, and append `?k=v&k=v` to a rendered path
//! - Base-URL resolution: layer explicit `url` settings over inferred
//!   `https`/`http` listener configuration, eliding default ports
//! - A process-wide [`BaseUrlCache`] that memoizes the resolved base URL
//!   until explicitly invalidated
//!
//! Configuration is consumed through the [`ConfigProvider`] trait, so this
//! crate never owns configuration storage. Two providers ship with the
//! crate: [`StaticConfig`] (in-memory map, also the test fixture) and
//! [`JsonConfig`] (sections deserialized out of a `serde_json::Value`).
//!
//! # Example
//!
//! ```
//! use routegen_core::ReservedKeys;
//! use routegen_url::{Section, StaticConfig, append_query, resolve_base_url};
//!
//! let reserved = ReservedKeys::from_names(["id"]);
//! let url = append_query("/users/42", [("tab", "posts")], &reserved);
//! assert_eq!(url, "/users/42?tab=posts");
//!
//! let config = StaticConfig::new()
//!     .with_section("url", Section::new().with_host("example.com"));
//! let base = resolve_base_url(&config).unwrap();
//! assert_eq!(base.to_string(), "http://example.com");
//! ```

#![forbid(unsafe_code)]

mod base;
mod config;
mod query;
mod resolver;

pub use base::BaseUrlCache;
pub use config::{ConfigProvider, JsonConfig, Section, StaticConfig};
pub use query::{append_query, append_query_json, encode_query, percent_encode};
pub use resolver::{
    BaseUrl, HTTP_DEFAULT_PORT, HTTPS_DEFAULT_PORT, UrlConfigError, resolve_base_url,
};
