use tracing::trace;

use super::node_section::NodeSection;
use crate::error::Result;
use crate::geometry::coord_seq;
use crate::geometry::relate_geometry::{check_line, check_ring};
use crate::geometry::{Dimension, Operand, PolygonId, RelateGeometry, RingId, SegmentString};
use crate::math::polygon_2d::is_ccw;
use crate::math::{equals_2d, Point3};

/// A line or ring of one operand, walked segment by segment.
///
/// Segment `i` runs from vertex `i` to vertex `i + 1`. The walk borrows the
/// coordinates of its source component until normalization derives a new
/// sequence, after which it owns that copy. Once normalized every query is
/// a read, so a walk can be shared across threads.
#[derive(Debug, Clone)]
pub struct RelateSegmentString<'a> {
    seq: SegmentString<'a>,
    operand: Operand,
    dimension: Dimension,
    id: usize,
    ring_id: Option<RingId>,
    polygon: Option<PolygonId>,
    geometry: &'a RelateGeometry,
}

impl<'a> RelateSegmentString<'a> {
    /// Creates a walk over a linestring.
    ///
    /// With `orient`, repeated points are removed immediately.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if `pts` has fewer than two points.
    pub fn create_line(
        pts: &'a [Point3],
        element_id: usize,
        geometry: &'a RelateGeometry,
        orient: bool,
    ) -> Result<Self> {
        check_line(pts)?;
        Ok(Self::new(
            pts,
            Dimension::Line,
            element_id,
            None,
            None,
            geometry,
            orient,
        ))
    }

    /// Creates a walk over one ring of a polygon.
    ///
    /// With `orient`, repeated points are removed immediately and the ring is
    /// oriented clockwise for a shell or counter-clockwise for a hole.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if `pts` has fewer than two points or is not
    /// closed.
    pub fn create_ring(
        pts: &'a [Point3],
        element_id: usize,
        ring_id: RingId,
        polygon: PolygonId,
        geometry: &'a RelateGeometry,
        orient: bool,
    ) -> Result<Self> {
        check_ring(pts)?;
        Ok(Self::new(
            pts,
            Dimension::Area,
            element_id,
            Some(ring_id),
            Some(polygon),
            geometry,
            orient,
        ))
    }

    fn new(
        pts: &'a [Point3],
        dimension: Dimension,
        id: usize,
        ring_id: Option<RingId>,
        polygon: Option<PolygonId>,
        geometry: &'a RelateGeometry,
        orient: bool,
    ) -> Self {
        let mut ss = Self {
            seq: SegmentString::borrowed(pts),
            operand: geometry.operand(),
            dimension,
            id,
            ring_id,
            polygon,
            geometry,
        };
        if orient {
            match ring_id {
                Some(ring_id) => ss.orient_and_remove_repeated(ring_id.is_shell()),
                None => ss.remove_repeated(),
            }
        }
        ss
    }

    #[must_use]
    pub fn operand(&self) -> Operand {
        self.operand
    }

    #[must_use]
    pub fn is_a(&self) -> bool {
        self.operand == Operand::A
    }

    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Element id of the source component.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Ring id, or `None` for a line.
    #[must_use]
    pub fn ring_id(&self) -> Option<RingId> {
        self.ring_id
    }

    /// The polygon this ring bounds, or `None` for a line.
    #[must_use]
    pub fn polygon(&self) -> Option<PolygonId> {
        self.polygon
    }

    /// The operand geometry this walk was taken from.
    #[must_use]
    pub fn geometry(&self) -> &'a RelateGeometry {
        self.geometry
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.seq.size()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.seq.segment_count()
    }

    #[must_use]
    pub fn coordinate(&self, index: usize) -> Point3 {
        self.seq.coordinate(index)
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Point3] {
        self.seq.coordinates()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.seq.is_closed()
    }

    /// Describes the walk's local topology at `int_pt`, which lies on
    /// segment `seg_index`.
    ///
    /// # Panics
    ///
    /// Panics if `seg_index` is not a segment of this walk.
    #[must_use]
    pub fn create_node_section(&self, seg_index: usize, int_pt: Point3) -> NodeSection {
        let c0 = self.coordinate(seg_index);
        let c1 = self.coordinate(seg_index + 1);
        let is_node_at_vertex = equals_2d(&int_pt, &c0) || equals_2d(&int_pt, &c1);
        let prev = self.prev_vertex(seg_index, &int_pt);
        let next = self.next_vertex(Some(seg_index), &int_pt);
        NodeSection::new(
            self.operand,
            self.dimension,
            self.id,
            self.ring_id,
            self.polygon,
            is_node_at_vertex,
            prev,
            int_pt,
            next,
        )
    }

    /// Returns the vertex preceding `pt` along the walk, where `pt` lies on
    /// segment `seg_index`.
    ///
    /// A point inside the segment is preceded by the segment start. A point
    /// at the segment start is preceded by the vertex before it, wrapping
    /// around a closed walk. Returns `None` at the start of an open walk.
    ///
    /// # Panics
    ///
    /// Panics if `seg_index` is not a segment of this walk.
    #[must_use]
    pub fn prev_vertex(&self, seg_index: usize, pt: &Point3) -> Option<Point3> {
        let seg_start = self.coordinate(seg_index);
        if !equals_2d(&seg_start, pt) {
            return Some(seg_start);
        }

        // pt is at segment start, so step back one vertex
        if seg_index > 0 {
            return Some(self.coordinate(seg_index - 1));
        }
        if self.is_closed() {
            return Some(self.seq.prev_in_ring(seg_index));
        }
        None
    }

    /// Returns the vertex following `pt` along the walk, where `pt` lies on
    /// segment `seg_index`.
    ///
    /// A point inside the segment is followed by the segment end. A point at
    /// the segment end is followed by the vertex after it, wrapping around a
    /// closed walk. Returns `None` at the end of an open walk.
    ///
    /// `None` for `seg_index` means the caller does not know the segment.
    /// That is only allowed for a single-segment walk, where a point at the
    /// end vertex is followed by vertex 0.
    ///
    /// # Panics
    ///
    /// Panics if `seg_index` is not a segment of this walk, or if it is
    /// `None` and the walk does not have exactly two vertices.
    #[must_use]
    pub fn next_vertex(&self, seg_index: Option<usize>, pt: &Point3) -> Option<Point3> {
        let Some(seg_index) = seg_index else {
            assert!(
                self.size() == 2,
                "unknown segment index on a walk of {} vertices",
                self.size()
            );
            let seg_end = self.coordinate(1);
            if !equals_2d(&seg_end, pt) {
                return Some(seg_end);
            }
            return Some(self.coordinate(0));
        };

        let seg_end = self.coordinate(seg_index + 1);
        if !equals_2d(&seg_end, pt) {
            return Some(seg_end);
        }

        // pt is at segment end, so step forward one vertex
        if seg_index + 2 < self.size() {
            return Some(self.coordinate(seg_index + 2));
        }
        if self.is_closed() {
            return Some(self.seq.next_in_ring(seg_index + 1));
        }
        None
    }

    /// Decides whether segment `seg_index` should process an intersection at
    /// `pt`.
    ///
    /// An intersection at a vertex shared by two segments is claimed by the
    /// segment it starts, except at the final vertex of an open walk, which
    /// only the final segment can claim.
    ///
    /// # Panics
    ///
    /// Panics if `seg_index` is not a segment of this walk.
    #[must_use]
    pub fn is_containing_segment(&self, seg_index: usize, pt: &Point3) -> bool {
        let c0 = self.coordinate(seg_index);
        if equals_2d(pt, &c0) {
            return true;
        }
        let c1 = self.coordinate(seg_index + 1);
        if equals_2d(pt, &c1) {
            let is_final_segment = seg_index == self.size() - 2;
            return !self.is_closed() && is_final_segment;
        }
        true
    }

    /// Orients the walk clockwise (`orient_cw`) or counter-clockwise, and
    /// removes consecutive repeated points.
    ///
    /// Leaves the walk as is when it already satisfies both. Otherwise the
    /// walk switches to a derived copy; the source coordinates are not
    /// modified.
    pub fn orient_and_remove_repeated(&mut self, orient_cw: bool) {
        let pts = self.seq.coordinates();
        let is_flipped = orient_cw == is_ccw(pts);
        let has_repeated = coord_seq::has_repeated_points(pts);
        if !is_flipped && !has_repeated {
            return;
        }

        let derived = if has_repeated {
            let mut deduped = coord_seq::remove_repeated_points(pts);
            if is_flipped {
                deduped.reverse();
            }
            deduped
        } else {
            coord_seq::reversed(pts)
        };
        trace!(
            operand = ?self.operand,
            id = self.id,
            ring = ?self.ring_id,
            is_flipped,
            removed = pts.len() - derived.len(),
            "normalized walk"
        );
        self.seq.replace(derived);
    }

    /// Removes consecutive repeated points, switching to a derived copy if
    /// any are found.
    pub fn remove_repeated(&mut self) {
        let pts = self.seq.coordinates();
        if !coord_seq::has_repeated_points(pts) {
            return;
        }
        let derived = coord_seq::remove_repeated_points(pts);
        trace!(
            operand = ?self.operand,
            id = self.id,
            removed = pts.len() - derived.len(),
            "removed repeated points"
        );
        self.seq.replace(derived);
    }
}
