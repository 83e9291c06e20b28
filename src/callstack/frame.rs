//! A single symbolic stack entry.

use core::fmt;
use std::path::Path;

use backtrace::SymbolName;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One resolved stack frame: source path, line, and the fully-qualified function name.
///
/// Frames are immutable once captured. The derived accessors ([`file`](Frame::file),
/// [`func`](Frame::func), [`pkg`](Frame::pkg)) are computed from the stored
/// values on every call and never allocate.
///
/// # Examples
///
/// ```
/// use error_trail::Frame;
///
/// let frame = Frame::new("/srv/app/src/store.rs", 42, "app::store::Store::load");
///
/// assert_eq!(frame.file(), "store.rs");
/// assert_eq!(frame.func(), "load");
/// assert_eq!(frame.pkg(), "app::store::Store");
/// assert_eq!(frame.to_string(), "/srv/app/src/store.rs:42");
/// assert_eq!(format!("{:#}", frame), "[load] /srv/app/src/store.rs:42");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    path: String,
    line: u32,
    function: String,
}

impl Frame {
    /// Creates a frame from already-resolved parts.
    #[inline]
    pub fn new(path: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self { path: path.into(), line, function: function.into() }
    }

    /// Builds a frame from backtrace symbol data, or `None` when nothing was resolved.
    pub(crate) fn from_symbol(
        name: Option<SymbolName<'_>>,
        filename: Option<&Path>,
        lineno: Option<u32>,
    ) -> Option<Self> {
        // `{:#}` drops the trailing mangling hash.
        let function = name.map(|n| format!("{n:#}")).unwrap_or_default();
        let path = filename.map(|p| p.display().to_string()).unwrap_or_default();
        if function.is_empty() && path.is_empty() {
            return None;
        }
        Some(Self { path, line: lineno.unwrap_or(0), function })
    }

    /// Full path of the source file.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base name of the source file.
    pub fn file(&self) -> &str {
        Path::new(&self.path).file_name().and_then(|f| f.to_str()).unwrap_or(&self.path)
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Fully-qualified function name, e.g. `app::store::Store::load`.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Function name with its module/type qualifier stripped.
    pub fn func(&self) -> &str {
        split_qualified(&self.function).1
    }

    /// The module/type qualifier that owns the function.
    pub fn pkg(&self) -> &str {
        split_qualified(&self.function).0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "[{}] ", self.func())?;
        }
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// Splits `a::b::c` at the last top-level `::`, ignoring separators nested in
/// generic or trait-impl brackets (`<app::Foo as core::fmt::Display>::fmt`).
fn split_qualified(function: &str) -> (&str, &str) {
    let bytes = function.as_bytes();
    let mut depth = 0usize;
    let mut split = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` inside a fn-pointer type is not a closing bracket
            b'>' if i > 0 && bytes[i - 1] == b'-' => {},
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                split = Some(i);
                i += 1;
            },
            _ => {},
        }
        i += 1;
    }

    match split {
        Some(at) => (&function[..at], &function[at + 2..]),
        None => ("", function),
    }
}
