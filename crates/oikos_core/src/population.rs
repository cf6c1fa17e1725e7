use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{exponential_population, logistic_population};
use crate::traits::{Parameters, SimulationModel, StepOutcome};

/// Parameters of the population growth pair. No range is enforced:
/// degenerate combinations (e.g. a capacity below the initial population)
/// produce degenerate but well-defined output, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationParams {
    pub initial_population: f64,
    pub growth_rate: f64,
    pub carrying_capacity: f64,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            initial_population: 1000.0,
            growth_rate: 0.2,
            carrying_capacity: 10000.0,
        }
    }
}

impl Parameters for PopulationParams {
    fn set(&mut self, name: &str, value: f64) -> Result<(), SimulationError> {
        match name {
            "initial_population" => self.initial_population = value,
            "growth_rate" => self.growth_rate = value,
            "carrying_capacity" => self.carrying_capacity = value,
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

/// One chart sample: both model outputs at the same month, with the growth
/// rate and capacity in effect denormalized onto the point so the chart can
/// show them without a join.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationPoint {
    pub time: u64,
    pub exp_n: i64,
    pub log_n: i64,
    pub growth_rate: f64,
    pub carrying_capacity: f64,
}

/// Exponential and logistic growth over a shared monthly time axis.
///
/// The series never freezes: a run lasts until the user stops it or the
/// exponential branch leaves the representable range.
pub struct PopulationModel;

impl SimulationModel for PopulationModel {
    type Params = PopulationParams;
    type Series = Vec<PopulationPoint>;

    const TICK_INTERVAL_MS: u32 = 1000;

    fn initial_series(params: &Self::Params) -> Self::Series {
        // Both formulas reduce to n at t = 0.
        let n = params.initial_population.round() as i64;
        vec![PopulationPoint {
            time: 0,
            exp_n: n,
            log_n: n,
            growth_rate: params.growth_rate,
            carrying_capacity: params.carrying_capacity,
        }]
    }

    fn advance(
        params: &Self::Params,
        series: &mut Self::Series,
    ) -> Result<StepOutcome, SimulationError> {
        let next_time = series.last().map_or(0, |point| point.time) + 1;
        let t = next_time as f64;

        let exp_n = exponential_population(params.initial_population, params.growth_rate, t)?;
        let log_n = logistic_population(
            params.initial_population,
            params.growth_rate,
            params.carrying_capacity,
            t,
        )?;

        series.push(PopulationPoint {
            time: next_time,
            exp_n,
            log_n,
            growth_rate: params.growth_rate,
            carrying_capacity: params.carrying_capacity,
        });
        Ok(StepOutcome::Advanced)
    }
}
