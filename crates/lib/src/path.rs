//! Dot-path types for reading nested values.
//!
//! The Path/PathBuf types follow the same borrowed/owned pattern as
//! std::path::Path/PathBuf. Paths are never normalized: every `.` separates
//! two segments, so leading, trailing and doubled dots produce empty-string
//! segments, and the empty path has exactly one empty segment.
//!
//! # Core Types
//!
//! - [`Path`] - An unsized borrowed path type (always behind a reference)
//! - [`PathBuf`] - An owned path type that can be constructed and extended
//! - [`PathSpec`] - Either a single path or an ordered list of fallback candidates
//!
//! # Usage
//!
//! ```rust
//! use vane::path::{Path, PathBuf, PathSpec};
//!
//! let path = Path::new("wind.speed");
//! assert_eq!(path.segments().collect::<Vec<_>>(), vec!["wind", "speed"]);
//!
//! let built = PathBuf::new().push("wind").push("speed");
//! assert_eq!(built.as_path(), path);
//!
//! let spec = PathSpec::candidates(["temp.celsius", "c"])?;
//! assert_eq!(spec.paths().len(), 2);
//! # Ok::<(), vane::path::PathError>(())
//! ```

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

use thiserror::Error;

/// Error type for malformed path specifications.
///
/// These are caller contract violations. A path that simply does not match
/// the data is never an error.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A candidate list must hold at least one path.
    #[error("candidate path list is empty")]
    EmptyCandidates,

    /// An untyped spec was neither a string nor an array of strings.
    #[error("invalid path spec: expected a string or an array of strings, found {found}")]
    InvalidSpec { found: String },
}

impl PathError {
    /// Check if this error is an empty candidate list
    pub fn is_empty_candidates(&self) -> bool {
        matches!(self, PathError::EmptyCandidates)
    }

    /// Get the offending input if this is an invalid spec
    pub fn found(&self) -> Option<&str> {
        match self {
            PathError::InvalidSpec { found } => Some(found),
            _ => None,
        }
    }
}

// Conversion from PathError to the main Error type
impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}

/// A borrowed dot-path.
///
/// `Path` is the borrowed counterpart to [`PathBuf`], similar to how `&str`
/// relates to `String`. Any string is a valid path.
///
/// This type is unsized and must always be used behind a reference.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl Path {
    /// Wraps a string slice as a `Path`.
    pub fn new<S: AsRef<str> + ?Sized>(s: &S) -> &Path {
        let s: &str = s.as_ref();
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the segments, empty segments included.
    ///
    /// ```rust
    /// # use vane::path::Path;
    /// assert_eq!(Path::new("").segments().collect::<Vec<_>>(), vec![""]);
    /// assert_eq!(Path::new(".a..b").segments().collect::<Vec<_>>(), vec!["", "a", "", "b"]);
    /// ```
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.inner.split('.')
    }

    /// Returns the number of segments, which is always at least one.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` for the empty path, which refers to the root itself.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last segment.
    pub fn last_segment(&self) -> &str {
        self.inner.rsplit('.').next().unwrap_or(&self.inner)
    }

    /// Returns the path without its last segment, or `None` for a single-segment path.
    pub fn parent(&self) -> Option<&Path> {
        self.inner
            .rfind('.')
            .map(|last_dot| Path::new(&self.inner[..last_dot]))
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

/// An owned dot-path.
///
/// # Examples
///
/// ```rust
/// # use vane::path::PathBuf;
/// let path = PathBuf::new().push("station").push("name");
/// assert_eq!(path.as_str(), "station.name");
///
/// // Parsing keeps every segment verbatim
/// let path: PathBuf = "a..b".parse().unwrap();
/// assert_eq!(path.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathBuf {
    inner: String,
}

impl PathBuf {
    /// Creates the empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Appends `part` after a single `.`.
    ///
    /// Pushing onto the empty path yields `part` itself. `part` is appended
    /// verbatim, so it may carry several segments.
    pub fn push(mut self, part: impl AsRef<str>) -> Self {
        let part = part.as_ref();
        if !self.inner.is_empty() {
            self.inner.push('.');
        }
        self.inner.push_str(part);
        self
    }

    /// Joins this path with another path.
    pub fn join(self, other: impl AsRef<Path>) -> Self {
        self.push(other.as_ref().as_str())
    }

    /// Borrows as a [`Path`].
    pub fn as_path(&self) -> &Path {
        Path::new(self.inner.as_str())
    }

    /// Consumes the path, returning the underlying string.
    pub fn into_string(self) -> String {
        self.inner
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.as_path()
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::new(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.as_path()
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> PathBuf {
        self.to_path_buf()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PathBuf::from(s))
    }
}

impl From<&str> for PathBuf {
    fn from(s: &str) -> Self {
        PathBuf {
            inner: s.to_string(),
        }
    }
}

impl From<String> for PathBuf {
    fn from(inner: String) -> Self {
        PathBuf { inner }
    }
}

impl From<&String> for PathBuf {
    fn from(s: &String) -> Self {
        PathBuf::from(s.as_str())
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl From<&PathBuf> for PathBuf {
    fn from(path: &PathBuf) -> Self {
        path.clone()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_path(), f)
    }
}

impl PartialEq<Path> for PathBuf {
    fn eq(&self, other: &Path) -> bool {
        self.as_path() == other
    }
}

impl PartialEq<&Path> for PathBuf {
    fn eq(&self, other: &&Path) -> bool {
        self.as_path() == *other
    }
}

impl PartialEq<str> for PathBuf {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for PathBuf {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

/// Which paths to read: one path, or fallback candidates tried in order.
///
/// The shape selects the resolution algorithm; see [`crate::resolve::lookup`].
/// A one-element candidate list is still a candidate list and is resolved
/// with the definedness policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSpec {
    /// A single dot-path
    Single(PathBuf),
    /// Non-empty list of dot-paths, first defined match wins
    Candidates(Vec<PathBuf>),
}

impl PathSpec {
    /// Creates a single-path spec.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        PathSpec::Single(path.into())
    }

    /// Creates a candidate list spec.
    ///
    /// # Errors
    /// Returns [`PathError::EmptyCandidates`] if `paths` yields nothing.
    pub fn candidates<I, P>(paths: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if paths.is_empty() {
            return Err(PathError::EmptyCandidates);
        }
        Ok(PathSpec::Candidates(paths))
    }

    /// Parses a spec from untyped JSON: a string or a non-empty array of strings.
    ///
    /// ```rust
    /// # use vane::path::{PathError, PathSpec};
    /// let spec = PathSpec::from_json(&serde_json::json!(["wind.speed", "ws"]))?;
    /// assert!(!spec.is_single());
    ///
    /// let err = PathSpec::from_json(&serde_json::json!(42)).unwrap_err();
    /// assert_eq!(err.found(), Some("42"));
    /// # Ok::<(), PathError>(())
    /// ```
    pub fn from_json(value: &serde_json::Value) -> Result<Self, PathError> {
        match value {
            serde_json::Value::String(path) => Ok(PathSpec::single(path)),
            serde_json::Value::Array(items) => {
                let paths = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| PathError::InvalidSpec {
                            found: item.to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                PathSpec::candidates(paths)
            }
            other => Err(PathError::InvalidSpec {
                found: other.to_string(),
            }),
        }
    }

    /// Returns true for the single-path shape.
    pub fn is_single(&self) -> bool {
        matches!(self, PathSpec::Single(_))
    }

    /// All paths of the spec, in resolution order.
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            PathSpec::Single(path) => std::slice::from_ref(path),
            PathSpec::Candidates(paths) => paths,
        }
    }
}

impl From<&str> for PathSpec {
    fn from(path: &str) -> Self {
        PathSpec::single(path)
    }
}

impl From<String> for PathSpec {
    fn from(path: String) -> Self {
        PathSpec::single(path)
    }
}

impl From<PathBuf> for PathSpec {
    fn from(path: PathBuf) -> Self {
        PathSpec::Single(path)
    }
}

impl From<&Path> for PathSpec {
    fn from(path: &Path) -> Self {
        PathSpec::Single(path.to_path_buf())
    }
}

impl<P: Into<PathBuf>> TryFrom<Vec<P>> for PathSpec {
    type Error = PathError;

    fn try_from(paths: Vec<P>) -> Result<Self, Self::Error> {
        PathSpec::candidates(paths)
    }
}

impl TryFrom<&[&str]> for PathSpec {
    type Error = PathError;

    fn try_from(paths: &[&str]) -> Result<Self, Self::Error> {
        PathSpec::candidates(paths.iter().copied())
    }
}

impl<const N: usize> TryFrom<[&str; N]> for PathSpec {
    type Error = PathError;

    fn try_from(paths: [&str; N]) -> Result<Self, Self::Error> {
        PathSpec::candidates(paths)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSpec::Single(path) => write!(f, "{path}"),
            PathSpec::Candidates(paths) => {
                write!(f, "[")?;
                for (i, path) in paths.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{path}")?;
                }
                write!(f, "]")
            }
        }
    }
}

/// Constructs a path.
///
/// - `path!()` - Empty path (`PathBuf`)
/// - `path!("wind.speed")` - Single literal (`&'static Path`, no allocation)
/// - `path!("wind", "speed")` - Parts joined with `.` (`PathBuf`)
/// - `path!(base, "speed")` - Mix runtime values and literals (`PathBuf`)
///
/// # Examples
///
/// ```rust
/// # use vane::path;
/// let literal = path!("wind.speed");
/// let field = "speed";
/// let joined = path!("wind", field);
/// assert_eq!(joined, literal);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::path::PathBuf::new()
    };

    ($single:literal) => {
        $crate::path::Path::new($single)
    };

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let path = $crate::path::PathBuf::new().push($first.to_string());
        $(
            let path = path.push($rest.to_string());
        )*
        path
    }};
}
