pub mod clock;
pub mod error;
pub mod models;
pub mod pollution;
pub mod population;
pub mod session;
/// The `oikos_core` crate provides the simulation engine for the Oikos
/// ecology teaching lab: closed-form population growth and river pollution
/// models advanced one step per clock tick.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `SimulationModel`
///   (model family), `Parameters` (named-field edits).
/// - **Models**: analytical solutions rounded to display resolution; the
///   rounding is authoritative for stop conditions.
/// - **Clock**: generation-counted tick gate, so cancellation is
///   synchronous and stale timer callbacks are discarded.
/// - **Session**: the start/stop/reset state machine owning parameters,
///   series, and the parameter snapshot captured at start.
pub mod traits;
