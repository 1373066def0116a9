//! Segment strings for topological relate computation.
//!
//! Each line and polygon ring of an operand geometry becomes a
//! [`RelateSegmentString`]. When noding finds an intersection on one of its
//! segments, the walk decides whether that segment owns the intersection and
//! describes its local topology as a [`NodeSection`].

mod config;
mod extract;
mod node_section;
mod segment_string;

pub use config::ExtractConfig;
pub use extract::extract_segment_strings;
pub use node_section::NodeSection;
pub use segment_string::RelateSegmentString;
