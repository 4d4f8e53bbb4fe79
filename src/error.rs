use thiserror::Error;

/// Failures of the polygon operations that have no meaningful geometric fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The shoelace area of the vertex loop is zero, so the centroid is undefined.
    #[error("degenerate area: centroid is undefined for a zero-area vertex loop")]
    DegenerateArea,

    /// The segments do not form a single closed cycle.
    #[error("disconnected edge set: {remaining} segment(s) could not be joined into a cycle")]
    DisconnectedEdgeSet { remaining: usize },

    /// Self-intersection splitting kept finding crossings after exhausting its budget.
    /// It's there to avoid infinite loops on pathological input.
    #[error("self-intersection split did not converge after {splits} splits")]
    SplitDidNotConverge { splits: usize },

    /// Hatch spacing has to be a positive, finite distance.
    #[error("invalid hatch spacing {0}")]
    InvalidSpacing(f64),
}
