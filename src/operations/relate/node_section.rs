use crate::geometry::{Dimension, Operand, PolygonId, RingId};
use crate::math::Point3;

/// Local topology of one walk at one intersection point.
///
/// Holds copies of the walk's context, so it stays valid after the walk is
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSection {
    operand: Operand,
    dimension: Dimension,
    id: usize,
    ring_id: Option<RingId>,
    polygon: Option<PolygonId>,
    is_node_at_vertex: bool,
    prev: Option<Point3>,
    node_pt: Point3,
    next: Option<Point3>,
}

impl NodeSection {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        operand: Operand,
        dimension: Dimension,
        id: usize,
        ring_id: Option<RingId>,
        polygon: Option<PolygonId>,
        is_node_at_vertex: bool,
        prev: Option<Point3>,
        node_pt: Point3,
        next: Option<Point3>,
    ) -> Self {
        Self {
            operand,
            dimension,
            id,
            ring_id,
            polygon,
            is_node_at_vertex,
            prev,
            node_pt,
            next,
        }
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

    /// Element id of the component the section was taken from.
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn ring_id(&self) -> Option<RingId> {
        self.ring_id
    }

    /// The polygon whose ring produced this section, if any.
    #[must_use]
    pub fn polygon(&self) -> Option<PolygonId> {
        self.polygon
    }

    /// `true` if the node coincides with a vertex of the walk.
    #[must_use]
    pub fn is_node_at_vertex(&self) -> bool {
        self.is_node_at_vertex
    }

    /// `true` if the node lies strictly inside a segment.
    #[must_use]
    pub fn is_proper(&self) -> bool {
        !self.is_node_at_vertex
    }

    #[must_use]
    pub fn node_pt(&self) -> Point3 {
        self.node_pt
    }

    /// Vertex before the node, or `None` at the start of an open walk.
    #[must_use]
    pub fn prev(&self) -> Option<Point3> {
        self.prev
    }

    /// Vertex after the node, or `None` at the end of an open walk.
    #[must_use]
    pub fn next(&self) -> Option<Point3> {
        self.next
    }

    /// Returns `prev` for `0` and `next` for any other index.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Option<Point3> {
        if i == 0 {
            self.prev
        } else {
            self.next
        }
    }

    #[must_use]
    pub fn is_area(&self) -> bool {
        self.dimension == Dimension::Area
    }

    /// `true` if the section lies on a polygon's outer ring.
    #[must_use]
    pub fn is_shell(&self) -> bool {
        self.ring_id.is_some_and(RingId::is_shell)
    }

    /// `true` if both sections come from the same operand.
    #[must_use]
    pub fn is_same_geometry(&self, other: &NodeSection) -> bool {
        self.operand == other.operand
    }

    /// `true` if both sections come from rings of the same polygon of the
    /// same operand.
    #[must_use]
    pub fn is_same_polygon(&self, other: &NodeSection) -> bool {
        self.is_same_geometry(other) && self.polygon.is_some() && self.polygon == other.polygon
    }
}
