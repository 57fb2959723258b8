//! Compiled path templates.
//!
//! A [`PathTemplate`] is the intermediate representation the Segment
//! Optimizer produces: an ordered list of ops where every run of literal
//! segments — separators included — has been fused into a single string at
//! compile time. Rendering walks the ops once; purely literal runs cost one
//! `push_str` regardless of length.

use std::fmt;

use routegen_core::{PathValue, RoutePattern, Segment};

/// One rendering instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Emit fused literal text (always begins with `/`).
    Literal(String),
    /// Emit the next argument as a single path component.
    Param {
        /// Binding name, for error reporting.
        name: String,
    },
    /// Emit the final argument as `/`-joined remaining components.
    /// Always the last op when present.
    JoinRest {
        /// Binding name, for error reporting.
        name: String,
    },
}

/// A pattern compiled into branch-free rendering instructions.
///
/// # Example
///
/// ```
/// use routegen_core::{PathValue, RoutePattern};
/// use routegen_helpers::PathTemplate;
///
/// let pattern = RoutePattern::builder()
///     .literal("users")
///     .param("id")
///     .literal("posts")
///     .build();
/// let template = PathTemplate::compile(&pattern);
///
/// let path = template.render(&[PathValue::from(42)]).unwrap();
/// assert_eq!(path, "/users/42/posts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    ops: Vec<Op>,
    arity: usize,
}

impl PathTemplate {
    /// Compile a pattern into its op list.
    ///
    /// Single left-to-right pass with a literal accumulator: literal
    /// segments extend the accumulator; a parameter or catch-all flushes it
    /// (with its trailing `/`) and emits the dynamic op. The empty pattern
    /// compiles to the root path `/`. Any pattern is valid input.
    #[must_use]
    pub fn compile(pattern: &RoutePattern) -> Self {
        let mut ops = Vec::new();
        let mut acc = String::new();
        let mut arity = 0;

        for segment in pattern.segments() {
            match segment {
                Segment::Literal(text) => {
                    acc.push('/');
                    acc.push_str(text);
                }
                Segment::Param(name) => {
                    acc.push('/');
                    ops.push(Op::Literal(std::mem::take(&mut acc)));
                    ops.push(Op::Param { name: name.clone() });
                    arity += 1;
                }
                Segment::CatchAll(name) => {
                    acc.push('/');
                    ops.push(Op::Literal(std::mem::take(&mut acc)));
                    ops.push(Op::JoinRest { name: name.clone() });
                    arity += 1;
                }
            }
        }
        if !acc.is_empty() {
            ops.push(Op::Literal(acc));
        }
        if ops.is_empty() {
            ops.push(Op::Literal("/".to_string()));
        }

        Self { ops, arity }
    }

    /// The compiled ops, in rendering order.
    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Number of arguments [`render`](Self::render) expects.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Render the path for the given arguments, in pattern order.
    ///
    /// Values have already been stringified by [`PathValue`]; no shape
    /// validation happens here. Only structural mismatches error: wrong
    /// argument count, or a scalar/list kind mismatch against the pattern.
    pub fn render(&self, args: &[PathValue]) -> Result<String, RenderError> {
        if args.len() != self.arity {
            return Err(RenderError::Arity {
                expected: self.arity,
                got: args.len(),
            });
        }

        let mut out = String::new();
        let mut next = args.iter();
        for op in &self.ops {
            match op {
                Op::Literal(text) => out.push_str(text),
                Op::Param { name } => match next.next() {
                    Some(PathValue::Segment(value)) => out.push_str(value),
                    _ => {
                        return Err(RenderError::ExpectedSegment { name: name.clone() });
                    }
                },
                Op::JoinRest { name } => match next.next() {
                    Some(PathValue::Rest(values)) => {
                        for (idx, value) in values.iter().enumerate() {
                            if idx > 0 {
                                out.push('/');
                            }
                            out.push_str(value);
                        }
                    }
                    _ => {
                        return Err(RenderError::ExpectedRest { name: name.clone() });
                    }
                },
            }
        }
        Ok(out)
    }
}

/// Render a path from segments not known ahead of time.
///
/// The fallback for dynamic patterns: `/` followed by the components joined
/// with `/`. An empty sequence renders the root path.
///
/// # Example
///
/// ```
/// use routegen_helpers::join_path;
///
/// assert_eq!(join_path(["users", "42"]), "/users/42");
/// assert_eq!(join_path(std::iter::empty::<&str>()), "/");
/// ```
pub fn join_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for segment in segments {
        out.push('/');
        out.push_str(segment.as_ref());
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Structural errors from rendering a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Wrong number of arguments for the pattern.
    Arity {
        /// Bindings the pattern declares.
        expected: usize,
        /// Arguments supplied.
        got: usize,
    },
    /// A list value was supplied where one path component is bound.
    ExpectedSegment {
        /// The binding name.
        name: String,
    },
    /// A scalar value was supplied for a catch-all binding.
    ExpectedRest {
        /// The binding name.
        name: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { expected, got } => {
                write!(f, "expected {expected} path arguments, got {got}")
            }
            Self::ExpectedSegment { name } => {
                write!(f, "binding {name} takes a single path component, got a list")
            }
            Self::ExpectedRest { name } => {
                write!(f, "catch-all binding {name} takes a list of components")
            }
        }
    }
}

impl std::error::Error for RenderError {}
