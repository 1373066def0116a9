use slotmap::SlotMap;

use super::coord_seq;
use crate::error::{GeometryError, Result, TopologyError};
use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a polygon in an operand geometry.
    pub struct PolygonId;
}

/// Which of the two related geometries something belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

/// Topological dimension of a geometry component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// A linestring.
    Line = 1,
    /// A polygon, walked as its boundary rings.
    Area = 2,
}

/// Identifies a ring within its polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RingId {
    /// The outer boundary.
    Shell,
    /// The n-th hole, numbered from 0.
    Hole(usize),
}

impl RingId {
    /// Returns `true` for the outer boundary.
    #[must_use]
    pub fn is_shell(self) -> bool {
        self == Self::Shell
    }
}

/// Rings of one polygon. Each ring is closed.
#[derive(Debug, Clone)]
pub struct PolygonData {
    /// Outer boundary.
    pub shell: Vec<Point3>,
    /// Inner boundaries.
    pub holes: Vec<Vec<Point3>>,
}

/// One component of an operand geometry.
#[derive(Debug, Clone)]
pub enum Element {
    Line(Vec<Point3>),
    Polygon(PolygonId),
}

/// One operand of a relate computation.
///
/// Owns the coordinates of its components. Walks extracted from it borrow
/// those coordinates and refer to its polygons by [`PolygonId`].
#[derive(Debug)]
pub struct RelateGeometry {
    operand: Operand,
    elements: Vec<Element>,
    polygons: SlotMap<PolygonId, PolygonData>,
}

impl RelateGeometry {
    /// Creates an empty geometry for the given operand.
    #[must_use]
    pub fn new(operand: Operand) -> Self {
        Self {
            operand,
            elements: Vec::new(),
            polygons: SlotMap::with_key(),
        }
    }

    /// Returns which operand this geometry is.
    #[must_use]
    pub fn operand(&self) -> Operand {
        self.operand
    }

    /// Returns `true` if this is operand A.
    #[must_use]
    pub fn is_a(&self) -> bool {
        self.operand == Operand::A
    }

    /// Appends a linestring and returns its element id.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if `pts` has fewer than two points.
    pub fn add_line(&mut self, pts: Vec<Point3>) -> Result<usize> {
        check_size(&pts)?;
        self.elements.push(Element::Line(pts));
        Ok(self.elements.len() - 1)
    }

    /// Appends a polygon and returns its id.
    ///
    /// # Errors
    ///
    /// Returns a `GeometryError` if any ring has fewer than two points or is
    /// not closed.
    pub fn add_polygon(
        &mut self,
        shell: Vec<Point3>,
        holes: Vec<Vec<Point3>>,
    ) -> Result<PolygonId> {
        check_ring(&shell)?;
        for hole in &holes {
            check_ring(hole)?;
        }
        let id = self.polygons.insert(PolygonData { shell, holes });
        self.elements.push(Element::Polygon(id));
        Ok(id)
    }

    /// Returns the polygon with the given id.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::PolygonNotFound` if the id is not part of this
    /// geometry.
    pub fn polygon(&self, id: PolygonId) -> Result<&PolygonData> {
        self.polygons
            .get(id)
            .ok_or_else(|| TopologyError::PolygonNotFound.into())
    }

    /// Returns the components in insertion order. The index of a component
    /// is its element id.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the number of components.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Returns the highest component dimension, or `None` when empty.
    #[must_use]
    pub fn dimension(&self) -> Option<Dimension> {
        self.elements
            .iter()
            .map(|e| match e {
                Element::Line(_) => Dimension::Line,
                Element::Polygon(_) => Dimension::Area,
            })
            .max()
    }
}

fn check_size(pts: &[Point3]) -> std::result::Result<(), GeometryError> {
    if pts.len() < 2 {
        return Err(GeometryError::TooFewPoints { count: pts.len() });
    }
    Ok(())
}

pub(crate) fn check_ring(pts: &[Point3]) -> std::result::Result<(), GeometryError> {
    check_size(pts)?;
    if !coord_seq::is_closed(pts) {
        return Err(GeometryError::RingNotClosed);
    }
    Ok(())
}

pub(crate) fn check_line(pts: &[Point3]) -> std::result::Result<(), GeometryError> {
    check_size(pts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_util::pts;
    use crate::error::RelateError;

    #[test]
    fn element_ids_follow_insertion_order() {
        let mut g = RelateGeometry::new(Operand::B);
        let l0 = g.add_line(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
        let p = g
            .add_polygon(
                pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
                vec![],
            )
            .unwrap();
        let l1 = g.add_line(pts(&[(2.0, 0.0), (3.0, 1.0)])).unwrap();
        assert_eq!((l0, l1), (0, 2));
        assert!(matches!(g.elements()[1], Element::Polygon(id) if id == p));
        assert_eq!(g.element_count(), 3);
        assert!(!g.is_a());
        assert_eq!(g.operand(), Operand::B);
    }

    #[test]
    fn dimension_is_highest_component() {
        let mut g = RelateGeometry::new(Operand::A);
        assert_eq!(g.dimension(), None);
        g.add_line(pts(&[(0.0, 0.0), (1.0, 1.0)])).unwrap();
        assert_eq!(g.dimension(), Some(Dimension::Line));
        g.add_polygon(
            pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            vec![],
        )
        .unwrap();
        assert_eq!(g.dimension(), Some(Dimension::Area));
    }

    #[test]
    fn rejects_short_line() {
        let mut g = RelateGeometry::new(Operand::A);
        let err = g.add_line(pts(&[(0.0, 0.0)])).unwrap_err();
        assert!(matches!(
            err,
            RelateError::Geometry(GeometryError::TooFewPoints { count: 1 })
        ));
    }

    #[test]
    fn rejects_open_hole() {
        let mut g = RelateGeometry::new(Operand::A);
        let err = g
            .add_polygon(
                pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 0.0)]),
                vec![pts(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)])],
            )
            .unwrap_err();
        assert!(matches!(
            err,
            RelateError::Geometry(GeometryError::RingNotClosed)
        ));
        assert_eq!(g.element_count(), 0);
    }

    #[test]
    fn polygon_lookup() {
        let mut g = RelateGeometry::new(Operand::A);
        let shell = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let id = g.add_polygon(shell.clone(), vec![]).unwrap();
        assert_eq!(g.polygon(id).unwrap().shell, shell);

        let other = RelateGeometry::new(Operand::B);
        assert!(matches!(
            other.polygon(id),
            Err(RelateError::Topology(TopologyError::PolygonNotFound))
        ));
    }

    #[test]
    fn ring_id_shell() {
        assert!(RingId::Shell.is_shell());
        assert!(!RingId::Hole(0).is_shell());
    }
}
