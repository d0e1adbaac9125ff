//! Error types for decomposition operations.

use thiserror::Error;

/// Errors that can occur while decomposing a polygon.
///
/// All of these are fatal to the call that produced them: no partial
/// result is returned, and nothing leaks into later calls, which own
/// their own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecompError {
    /// Fewer than three vertices were supplied.
    #[error("polygon needs at least 3 vertices, got {got}")]
    InvalidPolygon {
        /// Number of vertices supplied.
        got: usize,
    },

    /// A visibility scan failed to settle within its step budget.
    ///
    /// A simple polygon always resolves within the budget, so this means
    /// the input violated the simplicity precondition (e.g. its boundary
    /// self-intersects).
    #[error("visibility scan exceeded its step budget; polygon is not simple")]
    DegenerateInput,

    /// Solution recovery exhausted its guard counter.
    ///
    /// Indicates an internally inconsistent subproblem table rather than
    /// a bad input; surfaced instead of silently truncating the result.
    #[error("solution recovery exceeded its guard; subproblem table is inconsistent")]
    RecursionOverrun,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = DecompError::InvalidPolygon { got: 2 };
        assert!(e.to_string().contains("at least 3"));
        assert!(DecompError::DegenerateInput.to_string().contains("simple"));
        assert!(DecompError::RecursionOverrun.to_string().contains("guard"));
    }
}
