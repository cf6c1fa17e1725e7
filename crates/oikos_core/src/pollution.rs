use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{oxygen_deficit, travel_time, waste_concentration};
use crate::traits::{Parameters, SimulationModel, StepOutcome};

/// Parameters of the river pollution pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutionParams {
    /// cp0, mg/l at the discharge point.
    pub initial_waste_concentration: f64,
    /// d0, mg/l at the discharge point.
    pub initial_oxygen_deficit: f64,
    /// k1, 1/day.
    pub deoxygenation_rate: f64,
    /// k2, 1/day.
    pub reaeration_rate: f64,
    /// m/s, used to convert kilometre steps into elapsed days.
    pub river_velocity: f64,
}

impl Default for PollutionParams {
    fn default() -> Self {
        Self {
            initial_waste_concentration: 100.0,
            initial_oxygen_deficit: 20.0,
            deoxygenation_rate: 0.25,
            reaeration_rate: 0.4,
            river_velocity: 1.0,
        }
    }
}

impl Parameters for PollutionParams {
    fn set(&mut self, name: &str, value: f64) -> Result<(), SimulationError> {
        match name {
            "initial_waste_concentration" => self.initial_waste_concentration = value,
            "initial_oxygen_deficit" => self.initial_oxygen_deficit = value,
            "deoxygenation_rate" => self.deoxygenation_rate = value,
            "reaeration_rate" => self.reaeration_rate = value,
            "river_velocity" => self.river_velocity = value,
            _ => {
                return Err(SimulationError::InvalidParameter {
                    name: name.to_string(),
                    reason: "unknown field".to_string(),
                })
            }
        }
        Ok(())
    }
}

/// One sample of the time-domain series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    pub day: u64,
    pub concentration: i64,
    pub oxygen_deficit: i64,
}

/// One sample of the space-domain series, one kilometre per step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistancePoint {
    pub distance: u64,
    pub concentration: i64,
    pub oxygen_deficit: i64,
}

/// The two parallel pollution series: the same decay observed against
/// elapsed days and against kilometres travelled downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionSeries {
    pub day: Vec<DayPoint>,
    pub distance: Vec<DistancePoint>,
}

/// Waste dissolution and oxygen sag along a river.
///
/// Each series freezes independently once its rounded concentration reaches
/// exactly 0; when both are frozen the run auto-stops and the final decayed
/// state stays on screen until the user acknowledges it.
pub struct PollutionModel;

impl PollutionModel {
    fn day_frozen(series: &PollutionSeries) -> bool {
        series.day.last().map_or(false, |p| p.concentration == 0)
    }

    fn distance_frozen(series: &PollutionSeries) -> bool {
        series.distance.last().map_or(false, |p| p.concentration == 0)
    }
}

impl SimulationModel for PollutionModel {
    type Params = PollutionParams;
    type Series = PollutionSeries;

    const TICK_INTERVAL_MS: u32 = 500;

    fn initial_series(params: &Self::Params) -> Self::Series {
        let concentration = params.initial_waste_concentration.round() as i64;
        let deficit = params.initial_oxygen_deficit.round() as i64;
        PollutionSeries {
            day: vec![DayPoint {
                day: 0,
                concentration,
                oxygen_deficit: deficit,
            }],
            distance: vec![DistancePoint {
                distance: 0,
                concentration,
                oxygen_deficit: deficit,
            }],
        }
    }

    fn advance(
        params: &Self::Params,
        series: &mut Self::Series,
    ) -> Result<StepOutcome, SimulationError> {
        if !Self::day_frozen(series) {
            let next_day = series.day.last().map_or(0, |p| p.day) + 1;
            let t = next_day as f64;
            let concentration = waste_concentration(
                params.initial_waste_concentration,
                params.deoxygenation_rate,
                t,
            )?;
            let deficit = oxygen_deficit(
                params.initial_waste_concentration,
                params.initial_oxygen_deficit,
                params.deoxygenation_rate,
                params.reaeration_rate,
                t,
            )?;
            series.day.push(DayPoint {
                day: next_day,
                concentration,
                oxygen_deficit: deficit,
            });
        }

        if !Self::distance_frozen(series) {
            let next_distance = series.distance.last().map_or(0, |p| p.distance) + 1;
            let elapsed = travel_time(next_distance as f64, params.river_velocity);
            let concentration = waste_concentration(
                params.initial_waste_concentration,
                params.deoxygenation_rate,
                elapsed,
            )?;
            let deficit = oxygen_deficit(
                params.initial_waste_concentration,
                params.initial_oxygen_deficit,
                params.deoxygenation_rate,
                params.reaeration_rate,
                elapsed,
            )?;
            series.distance.push(DistancePoint {
                distance: next_distance,
                concentration,
                oxygen_deficit: deficit,
            });
        }

        // The freeze check runs against the freshly appended points, so the
        // tick that brings the last series to 0 also reports AllFrozen.
        if Self::day_frozen(series) && Self::distance_frozen(series) {
            Ok(StepOutcome::AllFrozen)
        } else {
            Ok(StepOutcome::Advanced)
        }
    }
}
