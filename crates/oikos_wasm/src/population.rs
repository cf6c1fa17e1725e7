//! Population growth session runner.

use oikos_core::population::PopulationModel;
use oikos_core::session::{Session, TickOutcome};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// WASM-exported session for the exponential/logistic population pair.
#[wasm_bindgen]
pub struct WasmPopulationSession {
    session: Session<PopulationModel>,
}

#[wasm_bindgen]
impl WasmPopulationSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPopulationSession {
        console_error_panic_hook::set_once();

        WasmPopulationSession {
            session: Session::new(),
        }
    }

    /// Milliseconds between ticks; the UI timer must run at this cadence.
    pub fn tick_interval_ms() -> u32 {
        Session::<PopulationModel>::tick_interval_ms()
    }

    /// Edits one parameter while idle: `initial_population`, `growth_rate`
    /// or `carrying_capacity`. While running the edit is a silent no-op.
    pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        self.session
            .set_parameter(name, value)
            .map_err(|e| JsValue::from_str(&format!("Parameter edit failed: {}", e)))
    }

    /// Arms the session and returns the generation the timer closure must
    /// pass back with every tick.
    pub fn start(&mut self) -> u64 {
        self.session.start()
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Runs one scheduled tick. Returns false once the session no longer
    /// accepts ticks from this generation (stopped, diverged, or
    /// superseded) so the caller can clear its interval.
    pub fn tick(&mut self, generation: u64) -> bool {
        matches!(self.session.tick(generation), TickOutcome::Advanced)
    }

    /// Read-only state snapshot for rendering: parameters, series, running
    /// and awaiting-reset flags, and the divergence message if any.
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.state())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Default for WasmPopulationSession {
    fn default() -> Self {
        Self::new()
    }
}
