//! Assembly error type.
//!
//! Only call-contract violations surface as errors. Data-quality problems
//! (missing coordinates, malformed geometry) degrade into diagnostics and
//! never fail the pipeline.

/// A violated call contract, distinguishable from data-quality degradation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    /// The descriptor carried no segment list at all (`segments` missing
    /// or null). An empty list is fine; a missing one is a producer bug.
    #[error("route descriptor has no segment list")]
    MissingSegments,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            AssembleError::MissingSegments.to_string(),
            "route descriptor has no segment list"
        );
    }
}
