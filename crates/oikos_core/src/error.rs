use thiserror::Error;

/// Errors surfaced by the simulation core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A formula's denominator reached zero or a computed value left the
    /// finite, representable range. Terminal for the current run: the
    /// session cancels the clock and reports a diverged status instead of
    /// appending `NaN`/`Infinity` to a series.
    #[error("model diverged: {0}")]
    InvalidModelState(&'static str),

    /// A parameter edit carrying a non-finite value or an unknown field
    /// name. Rejected at the edit boundary; no state is mutated.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}
