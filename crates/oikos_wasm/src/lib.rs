//! WASM bridge exposing the Oikos simulation sessions to the web UI.
//!
//! One exported session type per model family. The JS side owns the
//! periodic timer: it reads `tick_interval_ms`, schedules its interval at
//! that cadence, and passes the generation returned by `start` back into
//! `tick` so callbacks from a superseded timer are discarded by the core.

pub mod pollution;
pub mod population;
