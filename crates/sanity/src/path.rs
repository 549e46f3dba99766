//! Structural paths
//!
//! A [`Path`] identifies one field occurrence in a traversed value: field
//! names for record members and zero-based indices for sequence elements,
//! joined with `.` (e.g. `order.items.1`).

use std::fmt;

use smallvec::SmallVec;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A record member, by its resolved name.
    Field(String),
    /// A sequence element.
    Index(usize),
}

impl Segment {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Ordered segments from the root to a field.
///
/// Paths are built by extension: each recursive step clones its parent's
/// path and pushes one segment, so siblings never observe each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: SmallVec<[Segment; 8]>,
}

impl Path {
    /// The empty root path.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    #[must_use]
    pub fn join(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path extended with a record member name.
    #[must_use]
    pub fn field(&self, name: impl Into<String>) -> Self {
        self.join(Segment::field(name))
    }

    /// Returns a new path extended with a sequence index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        self.join(Segment::Index(index))
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments; the root has depth zero.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
