//! River pollution session runner.

use oikos_core::pollution::PollutionModel;
use oikos_core::session::{Session, TickOutcome};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// WASM-exported session for the waste-concentration/oxygen-deficit pair.
#[wasm_bindgen]
pub struct WasmPollutionSession {
    session: Session<PollutionModel>,
}

#[wasm_bindgen]
impl WasmPollutionSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmPollutionSession {
        console_error_panic_hook::set_once();

        WasmPollutionSession {
            session: Session::new(),
        }
    }

    /// Milliseconds between ticks; the UI timer must run at this cadence.
    pub fn tick_interval_ms() -> u32 {
        Session::<PollutionModel>::tick_interval_ms()
    }

    /// Edits one parameter while idle: `initial_waste_concentration`,
    /// `initial_oxygen_deficit`, `deoxygenation_rate`, `reaeration_rate`
    /// or `river_velocity`. While running the edit is a silent no-op.
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

    /// Acknowledges an auto-stopped or diverged run and recomputes the
    /// initial point from the current parameters.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Runs one scheduled tick. Returns false once the session no longer
    /// accepts ticks from this generation; on auto-stop the state snapshot
    /// reports `awaiting_reset` so the UI can offer the reset control.
    pub fn tick(&mut self, generation: u64) -> bool {
        matches!(self.session.tick(generation), TickOutcome::Advanced)
    }

    /// Read-only state snapshot for rendering: parameters, both series,
    /// running and awaiting-reset flags, and the divergence message if any.
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.session.state())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl Default for WasmPollutionSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn zero_concentration_auto_stops_immediately() {
        let mut session = WasmPollutionSession::new();
        session
            .set_parameter("initial_waste_concentration", 0.0)
            .expect("edit");

        let generation = session.start();
        assert!(!session.tick(generation));

        let state = session.get_state().expect("state");
        assert!(state.is_object());
    }
}
