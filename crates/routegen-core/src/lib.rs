//! Core data model for the routegen route-helper compiler.
//!
//! This crate provides the immutable inputs the compiler works from:
//!
//! - [`Segment`] and [`RoutePattern`] — ordered path patterns of literal
//!   text, named parameters, and an optional trailing catch-all
//! - [`Route`] — a pattern bound to an action tag, optionally named for
//!   helper generation
//! - [`ReservedKeys`] — the binding names of a route, used to keep query
//!   parameters from shadowing path parameters
//! - [`PathValue`] — a call-time argument bound to one pattern parameter
//!
//! All types here are plain data: no I/O, no interior mutability, and no
//! validation of bound values. Patterns are fully known before any helper
//! is generated and never change afterwards.
//!
//! # Example
//!
//! ```
//! use routegen_core::{Route, RoutePattern};
//!
//! let pattern = RoutePattern::builder()
//!     .literal("users")
//!     .param("id")
//!     .build();
//!
//! let route = Route::new("show", pattern).with_helper("user");
//! assert_eq!(route.helper(), Some("user"));
//! assert!(route.reserved_keys().contains("id"));
//! ```

#![forbid(unsafe_code)]

mod pattern;
mod route;
mod value;

pub use pattern::{PatternBuilder, RoutePattern, Segment};
pub use route::{ReservedKeys, Route};
pub use value::PathValue;
