pub mod coord_seq;
pub mod relate_geometry;
pub mod segment_string;

pub use relate_geometry::{
    Dimension, Element, Operand, PolygonData, PolygonId, RelateGeometry, RingId,
};
pub use segment_string::SegmentString;
