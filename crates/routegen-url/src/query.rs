//! Query string building utilities.
//!
//! This module is the inverse of a query parser: it takes extra parameters
//! supplied at helper call time, drops any key that collides with a route's
//! own path-parameter names, percent-encodes the remainder per RFC 3986, and
//! appends the result to a rendered path.
//!
//! Output order is the iteration order of the input mapping, so slices,
//! `Vec`, and `BTreeMap` inputs produce reproducible query strings.
//!
//! # Example
//!
//! ```
//! use routegen_core::ReservedKeys;
//! use routegen_url::append_query;
//!
//! let reserved = ReservedKeys::from_names(["id"]);
//!
//! // Reserved keys are dropped silently; empty extras leave the path alone.
//! assert_eq!(
//!     append_query("/users/42", [("id", "99"), ("tab", "posts")], &reserved),
//!     "/users/42?tab=posts"
//! );
//! assert_eq!(
//!     append_query("/users/42", std::iter::empty::<(&str, &str)>(), &reserved),
//!     "/users/42"
//! );
//! ```

use std::borrow::Cow;
use std::fmt;

use routegen_core::ReservedKeys;
use serde_json::Value;

/// Append extra parameters to a path as a query string.
///
/// Keys and values are converted to their string form, entries whose key is
/// in `reserved` are dropped, and the rest are percent-encoded and joined
/// with `&`. When nothing remains the path is returned unchanged — no
/// trailing `?`.
pub fn append_query<I, K, V>(path: &str, extra: I, reserved: &ReservedKeys) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: fmt::Display,
    V: fmt::Display,
{
    let encoded = encode_query(
        extra
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .filter(|(k, _)| !reserved.contains(k)),
    );
    if encoded.is_empty() {
        return path.to_string();
    }
    let mut out = String::with_capacity(path.len() + 1 + encoded.len());
    out.push_str(path);
    out.push('?');
    out.push_str(&encoded);
    out
}

/// Append the entries of a JSON object to a path as a query string.
///
/// String values render bare (`tab=posts`, not `tab=%22posts%22`); other
/// values use their JSON form. `serde_json::Map` iterates in sorted key
/// order, so the output is deterministic.
#[must_use]
pub fn append_query_json(
    path: &str,
    extra: &serde_json::Map<String, Value>,
    reserved: &ReservedKeys,
) -> String {
    append_query(
        path,
        extra.iter().map(|(k, v)| (k, json_atom(v))),
        reserved,
    )
}

/// Encode key-value pairs as `k=v&k=v` with RFC 3986 percent-encoding.
///
/// No filtering is applied here; see [`append_query`] for the
/// reserved-key-aware form.
pub fn encode_query<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&percent_encode(key.as_ref()));
        out.push('=');
        out.push_str(&percent_encode(value.as_ref()));
    }
    out
}

/// Percent-encode a query component.
///
/// Unreserved bytes (ALPHA / DIGIT / `-` / `.` / `_` / `~`) pass through;
/// everything else becomes `%XX` with uppercase hex. Returns
/// `Cow::Borrowed` when nothing needed encoding (the common case).
///
/// # Example
///
/// ```
/// use routegen_url::percent_encode;
///
/// // Nothing to encode - returns borrowed
/// let plain = percent_encode("posts");
/// assert!(matches!(plain, std::borrow::Cow::Borrowed(_)));
///
/// assert_eq!(&*percent_encode("a b"), "a%20b");
/// assert_eq!(&*percent_encode("a&b=c"), "a%26b%3Dc");
/// ```
#[must_use]
pub fn percent_encode(s: &str) -> Cow<'_, str> {
    // Fast path: everything unreserved
    if s.bytes().all(is_unreserved) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    for b in s.bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(hex_digit(b >> 4));
            out.push(hex_digit(b & 0x0f));
        }
    }
    Cow::Owned(out)
}

/// RFC 3986 unreserved characters.
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Convert a nibble to its uppercase hex character.
fn hex_digit(nibble: u8) -> char {
    match nibble {
        0..=9 => char::from(b'0' + nibble),
        _ => char::from(b'A' + nibble - 10),
    }
}

/// Render a JSON value as a query atom: strings bare, the rest as JSON.
fn json_atom(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
