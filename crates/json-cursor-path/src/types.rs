//! Path types.

use std::fmt;

/// Marker every rendered path starts with.
pub const ROOT_MARKER: &str = "$";

/// One step of a [`CursorPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member access, rendered `.key`.
    Key(String),
    /// Array element access, rendered `[index]`.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Keys are written verbatim, no quoting or escaping.
            PathSegment::Key(key) => write!(f, ".{key}"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Location of a value in a document, relative to the root `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CursorPath {
    segments: Vec<PathSegment>,
}

impl CursorPath {
    /// The path of the whole document, `$`.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// The path one level up, or `None` at the root.
    pub fn parent(&self) -> Option<CursorPath> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self::new(rest.to_vec()))
    }
}

impl fmt::Display for CursorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ROOT_MARKER)?;
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<CursorPath> for String {
    fn from(path: CursorPath) -> Self {
        path.to_string()
    }
}

impl From<Vec<PathSegment>> for CursorPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self::new(segments)
    }
}

impl FromIterator<PathSegment> for CursorPath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
