/// Errors that can occur while assembling a figure.
///
/// Both variants are local, recoverable conditions: the expected policy is
/// to handle them at the call site and carry on, not to abort.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BuildError {
    /// A size step was given a non-positive (or NaN) value. The in-progress
    /// figure is left exactly as it was before the step.
    #[error("figure size must be positive, got {size}")]
    InvalidSize { size: f64 },

    /// A director operation ran before any builder was assigned.
    #[error("no builder assigned to the director")]
    NoBuilder,
}
