use num_traits::{Float, FromPrimitive, ToPrimitive};
use serde::Serialize;
use std::fmt::Debug;

use crate::error::SimulationError;

/// A trait for types that can be used as scalars in the model formulas.
/// Must support basic arithmetic, debug printing, and conversion to/from f64.
pub trait Scalar: Float + FromPrimitive + ToPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + ToPrimitive + Debug + 'static> Scalar for T {}

/// A parameter set editable by named field from the presentation layer.
pub trait Parameters {
    /// Updates the field called `name`.
    /// Unknown names are rejected and the previous value is retained.
    fn set(&mut self, name: &str, value: f64) -> Result<(), SimulationError>;
}

/// Result of advancing a model by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The series grew (or at least one of them did).
    Advanced,
    /// Every series sits at its terminal condition; the clock must stop.
    AllFrozen,
}

/// A model family: its parameter set, the series it produces, its tick
/// cadence, and the per-tick advance rule encoding the stop condition.
/// The session state machine is written once, generic over this.
pub trait SimulationModel {
    type Params: Parameters + Clone + Default + Serialize;
    type Series: Serialize;

    /// Milliseconds between clock ticks for this family.
    const TICK_INTERVAL_MS: u32;

    /// The single-point series representing the initial condition.
    fn initial_series(params: &Self::Params) -> Self::Series;

    /// Evaluates the closed-form solutions at the next step and appends a
    /// point to every series that has not reached its terminal condition.
    /// Values are recomputed from step 0 each call, never accumulated, so
    /// the rounding order stays part of the observable output.
    fn advance(
        params: &Self::Params,
        series: &mut Self::Series,
    ) -> Result<StepOutcome, SimulationError>;
}
