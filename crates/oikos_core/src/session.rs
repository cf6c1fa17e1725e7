use anyhow::Result;
use serde::Serialize;

use crate::clock::TickClock;
use crate::error::SimulationError;
use crate::traits::{Parameters, SimulationModel, StepOutcome};

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Status {
    /// Parameters editable; the series holds the single initial point.
    Idle,
    /// The clock is armed; ticks append points from the start snapshot.
    Running,
    /// Every series reached its terminal condition. The final decayed state
    /// stays visible until an explicit reset.
    AutoStopped,
    /// A formula produced a non-finite value; terminal until reset.
    Diverged(String),
}

/// What a tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// New point(s) appended.
    Advanced,
    /// The tick carried a superseded generation (or arrived while stopped)
    /// and was discarded without touching any state.
    Stale,
    /// All series froze; the clock cancelled itself.
    AutoStopped,
    /// A formula diverged; the run failed and the clock cancelled itself.
    Diverged,
}

/// Read-only snapshot handed to the presentation layer for rendering.
// The model type itself never crosses the boundary; its Params and Series
// already carry the Serialize bounds through the trait.
#[derive(Debug, Serialize)]
#[serde(bound(serialize = ""))]
pub struct SessionState<'a, M: SimulationModel> {
    pub parameters: &'a M::Params,
    pub series: &'a M::Series,
    pub running: bool,
    pub awaiting_reset: bool,
    pub status: &'a Status,
}

/// State machine owning one simulation run: the editable parameters, the
/// accumulated series, the tick clock, and the parameter snapshot captured
/// at start so a scheduled tick can never observe a later edit.
pub struct Session<M: SimulationModel> {
    params: M::Params,
    snapshot: Option<M::Params>,
    series: M::Series,
    clock: TickClock,
    status: Status,
}

impl<M: SimulationModel> Session<M> {
    pub fn new() -> Self {
        Self::with_params(M::Params::default())
    }

    pub fn with_params(params: M::Params) -> Self {
        let series = M::initial_series(&params);
        Self {
            params,
            snapshot: None,
            series,
            clock: TickClock::new(),
            status: Status::Idle,
        }
    }

    /// Arms the clock and captures the parameter snapshot ticks will use.
    /// Returns the generation the timer must pass back with every tick.
    ///
    /// Only `Idle` transitions to `Running`; in any other state this is a
    /// no-op returning the current generation, so an auto-stopped or
    /// diverged run must be acknowledged with `reset` before restarting.
    pub fn start(&mut self) -> u64 {
        if self.status == Status::Idle {
            self.snapshot = Some(self.params.clone());
            self.status = Status::Running;
            self.clock.start()
        } else {
            self.clock.generation()
        }
    }

    /// Cancels the run and resets the series to its single initial point.
    /// Stopping is deliberately also a reset of the displayed series.
    pub fn stop(&mut self) {
        if self.status == Status::Running {
            self.clock.cancel();
            self.snapshot = None;
            self.series = M::initial_series(&self.params);
            self.status = Status::Idle;
        }
    }

    /// Acknowledges an auto-stopped or diverged run and recomputes the
    /// single initial point. Idempotent in `Idle`; a no-op while running.
    pub fn reset(&mut self) {
        if self.status != Status::Running {
            self.snapshot = None;
            self.series = M::initial_series(&self.params);
            self.status = Status::Idle;
        }
    }

    /// Edits one parameter and synchronously recomputes the single-point
    /// series; there is no separate apply step.
    ///
    /// Accepted only in `Idle`; in any other state the edit is a silent
    /// no-op. Non-finite values and unknown names are rejected with the
    /// previous value retained.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<()> {
        if self.status != Status::Idle {
            return Ok(());
        }
        if !value.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: name.to_string(),
                reason: format!("value {value} is not finite"),
            }
            .into());
        }
        self.params.set(name, value)?;
        self.series = M::initial_series(&self.params);
        Ok(())
    }

    /// Executes one tick scheduled by the presentation layer's timer.
    /// A tick carrying a superseded generation is discarded before it can
    /// touch any state.
    pub fn tick(&mut self, generation: u64) -> TickOutcome {
        if !self.clock.accepts(generation) || self.status != Status::Running {
            return TickOutcome::Stale;
        }
        let Some(snapshot) = self.snapshot.as_ref() else {
            return TickOutcome::Stale;
        };
        match M::advance(snapshot, &mut self.series) {
            Ok(StepOutcome::Advanced) => TickOutcome::Advanced,
            Ok(StepOutcome::AllFrozen) => {
                self.clock.cancel();
                self.status = Status::AutoStopped;
                TickOutcome::AutoStopped
            }
            Err(error) => {
                self.clock.cancel();
                self.status = Status::Diverged(error.to_string());
                TickOutcome::Diverged
            }
        }
    }

    pub fn state(&self) -> SessionState<'_, M> {
        SessionState {
            parameters: &self.params,
            series: &self.series,
            running: self.is_running(),
            awaiting_reset: self.status == Status::AutoStopped,
            status: &self.status,
        }
    }

    pub fn params(&self) -> &M::Params {
        &self.params
    }

    pub fn series(&self) -> &M::Series {
        &self.series
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    /// Milliseconds between ticks for this session's model family.
    pub fn tick_interval_ms() -> u32 {
        M::TICK_INTERVAL_MS
    }
}

impl<M: SimulationModel> Default for Session<M> {
    fn default() -> Self {
        Self::new()
    }
}
