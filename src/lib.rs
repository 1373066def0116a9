pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

#[cfg(test)]
mod test_util;

pub use error::{RelateError, Result};
pub use geometry::{Dimension, Operand, PolygonId, RelateGeometry, RingId};
pub use operations::relate::{
    extract_segment_strings, ExtractConfig, NodeSection, RelateSegmentString,
};
