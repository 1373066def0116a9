use thiserror::Error;

/// Top-level error type for relate segment strings.
#[derive(Debug, Error)]
pub enum RelateError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised when input coordinates break a construction precondition.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("sequence has {count} point(s), at least 2 are required")]
    TooFewPoints { count: usize },

    #[error("ring is not closed")]
    RingNotClosed,
}

/// Errors related to lookups in an operand geometry.
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    #[error("polygon not found")]
    PolygonNotFound,
}

/// Convenience type alias for results using [`RelateError`].
pub type Result<T> = std::result::Result<T, RelateError>;
