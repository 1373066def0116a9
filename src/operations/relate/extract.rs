use tracing::{debug, instrument};

use super::config::ExtractConfig;
use super::segment_string::RelateSegmentString;
use crate::error::Result;
use crate::geometry::{Element, RelateGeometry, RingId};

/// Builds one walk per linestring and per polygon ring of `geometry`.
///
/// Walks appear in element order; a polygon yields its shell followed by its
/// holes. Walks borrow the geometry's coordinates unless normalization
/// changes them.
///
/// # Errors
///
/// Returns an error if a polygon referenced by the geometry cannot be found.
#[instrument(skip_all, fields(operand = ?geometry.operand()))]
pub fn extract_segment_strings<'a>(
    geometry: &'a RelateGeometry,
    config: &ExtractConfig,
) -> Result<Vec<RelateSegmentString<'a>>> {
    let mut walks = Vec::new();

    for (id, element) in geometry.elements().iter().enumerate() {
        match element {
            Element::Line(pts) => {
                let mut ss = RelateSegmentString::create_line(pts, id, geometry, false)?;
                if config.orient {
                    ss.remove_repeated();
                }
                walks.push(ss);
            }
            Element::Polygon(poly) => {
                let data = geometry.polygon(*poly)?;
                let rings = std::iter::once((RingId::Shell, &data.shell)).chain(
                    data.holes
                        .iter()
                        .enumerate()
                        .map(|(i, hole)| (RingId::Hole(i), hole)),
                );
                for (ring_id, pts) in rings {
                    let mut ss =
                        RelateSegmentString::create_ring(pts, id, ring_id, *poly, geometry, false)?;
                    if config.orient {
                        ss.orient_and_remove_repeated(ring_id.is_shell() == config.shell_cw);
                    }
                    walks.push(ss);
                }
            }
        }
    }

    debug!(count = walks.len(), "extracted walks");
    Ok(walks)
}
