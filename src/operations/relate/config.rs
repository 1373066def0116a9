//! Configuration for walk extraction.

/// Controls how [`extract_segment_strings`](super::extract_segment_strings)
/// prepares walks.
#[derive(Debug, Clone, Copy)]
pub struct ExtractConfig {
    /// Normalize each walk as it is created: remove repeated points from
    /// every walk and orient rings.
    pub orient: bool,
    /// Required orientation of polygon shells. Holes are given the opposite
    /// orientation.
    pub shell_cw: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            orient: true,
            shell_cw: true,
        }
    }
}

impl ExtractConfig {
    /// Leaves every walk borrowing its source coordinates unchanged.
    #[must_use]
    pub fn raw() -> Self {
        Self {
            orient: false,
            ..Self::default()
        }
    }
}
