use std::borrow::Cow;

use super::coord_seq;
use crate::math::Point3;

/// An ordered sequence of vertices with ring-aware navigation.
///
/// The vertices are either borrowed from the caller or owned by the sequence.
/// A borrowed sequence is never written to; replacing it installs a new owned
/// buffer and leaves the caller's data as it was.
#[derive(Debug, Clone)]
pub struct SegmentString<'a> {
    pts: Cow<'a, [Point3]>,
}

impl<'a> SegmentString<'a> {
    /// Creates a sequence that borrows `pts`.
    #[must_use]
    pub fn borrowed(pts: &'a [Point3]) -> Self {
        Self {
            pts: Cow::Borrowed(pts),
        }
    }

    /// Creates a sequence that owns `pts`.
    #[must_use]
    pub fn owned(pts: Vec<Point3>) -> Self {
        Self {
            pts: Cow::Owned(pts),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn size(&self) -> usize {
        self.pts.len()
    }

    /// Returns the number of segments (`size - 1`, or 0 when empty).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.pts.len().saturating_sub(1)
    }

    /// Returns the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn coordinate(&self, index: usize) -> Point3 {
        self.pts[index]
    }

    /// Returns all vertices.
    #[must_use]
    pub fn coordinates(&self) -> &[Point3] {
        &self.pts
    }

    /// Returns `true` if the first and last vertices are 2D-equal.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        coord_seq::is_closed(&self.pts)
    }

    /// Returns `true` once the sequence holds its own copy of the vertices.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self.pts, Cow::Owned(_))
    }

    /// Returns the ring vertex before `index`.
    ///
    /// For `index == 0` this skips the closing point and returns the
    /// second-to-last vertex. Only meaningful for closed sequences.
    #[must_use]
    pub fn prev_in_ring(&self, index: usize) -> Point3 {
        let prev = if index == 0 {
            self.size() - 2
        } else {
            index - 1
        };
        self.coordinate(prev)
    }

    /// Returns the ring vertex after `index`.
    ///
    /// For the closing point this wraps to vertex 1. Only meaningful for
    /// closed sequences.
    #[must_use]
    pub fn next_in_ring(&self, index: usize) -> Point3 {
        let mut next = index + 1;
        if next > self.size() - 1 {
            next = 1;
        }
        self.coordinate(next)
    }

    /// Installs an owned vertex buffer in place of the current one.
    pub(crate) fn replace(&mut self, pts: Vec<Point3>) {
        self.pts = Cow::Owned(pts);
    }
}
