//! Closed-form analytical solutions for the two model families.
//!
//! Every function evaluates the solution at the requested step and rounds to
//! the nearest integer. The rounding is authoritative, not display-only:
//! stop conditions compare the rounded values, so callers must evaluate the
//! closed form at each step rather than accumulating increments.
//!
//! Any non-finite result, and any rounded value outside the `i64` range, is
//! an `InvalidModelState`. These functions never return `NaN` or infinity
//! disguised as a count.

use crate::error::SimulationError;
use crate::traits::Scalar;

/// `round(n · e^(r·t))`, unbounded exponential growth.
pub fn exponential_population<T: Scalar>(n: T, r: T, t: T) -> Result<i64, SimulationError> {
    round_count(
        n * (r * t).exp(),
        "exponential population left the representable range",
    )
}

/// `round((n·k·e^(r·t)) / (k − n + n·e^(r·t)))`, growth saturating at the
/// carrying capacity `k`.
///
/// At `t = 0` the denominator is exactly `k`, so `k == n` is well-defined.
/// Parameter combinations that drive the denominator to zero or below are
/// rejected instead of being evaluated.
pub fn logistic_population<T: Scalar>(n: T, r: T, k: T, t: T) -> Result<i64, SimulationError> {
    let growth = (r * t).exp();
    let denominator = k - n + n * growth;
    if denominator <= T::zero() {
        return Err(SimulationError::InvalidModelState(
            "logistic denominator is zero or negative",
        ));
    }
    round_count(
        n * k * growth / denominator,
        "logistic population left the representable range",
    )
}

/// `round(cp0 · e^(−k1·t))`, first-order decay of the waste concentration.
pub fn waste_concentration<T: Scalar>(cp0: T, k1: T, t: T) -> Result<i64, SimulationError> {
    round_count(
        cp0 * (-k1 * t).exp(),
        "waste concentration left the representable range",
    )
}

/// Oxygen sag: `round((k1·cp0)/(k2−k1) · (e^(−k1·t) − e^(−k2·t)) + d0·e^(−k2·t))`.
///
/// Coincident rate constants make the leading coefficient undefined and are
/// rejected rather than evaluated as a division by zero.
pub fn oxygen_deficit<T: Scalar>(
    cp0: T,
    d0: T,
    k1: T,
    k2: T,
    t: T,
) -> Result<i64, SimulationError> {
    if k2 == k1 {
        return Err(SimulationError::InvalidModelState(
            "deoxygenation and reaeration rates coincide",
        ));
    }
    let decay1 = (-k1 * t).exp();
    let decay2 = (-k2 * t).exp();
    let sag = k1 * cp0 / (k2 - k1) * (decay1 - decay2) + d0 * decay2;
    round_count(sag, "oxygen deficit left the representable range")
}

/// Elapsed days after travelling `distance` kilometres downstream at
/// `velocity` metres per second. The distance-domain pollution series feeds
/// this through the day-domain formulas.
pub fn travel_time<T: Scalar>(distance: T, velocity: T) -> T {
    let km_per_hour = velocity / T::from_f64(1000.0).unwrap() * T::from_f64(3600.0).unwrap();
    distance / km_per_hour
}

fn round_count<T: Scalar>(value: T, context: &'static str) -> Result<i64, SimulationError> {
    if !value.is_finite() {
        return Err(SimulationError::InvalidModelState(context));
    }
    value
        .round()
        .to_i64()
        .ok_or(SimulationError::InvalidModelState(context))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential_matches_hand_computed_value() {
        // round(1000 · e^0.2) = round(1221.4) = 1221
        assert_eq!(exponential_population(1000.0, 0.2, 1.0).unwrap(), 1221);
    }

    #[test]
    fn exponential_is_monotone_for_positive_growth() {
        let mut previous = exponential_population(1000.0, 0.2, 0.0).unwrap();
        for t in 1..40 {
            let current = exponential_population(1000.0, 0.2, t as f64).unwrap();
            assert!(current >= previous, "population shrank at t = {t}");
            previous = current;
        }
    }

    #[test]
    fn exponential_overflow_is_an_error_not_infinity() {
        let result = exponential_population(1000.0, 0.2, 4000.0);
        assert!(matches!(
            result,
            Err(SimulationError::InvalidModelState(_))
        ));
    }

    #[test]
    fn logistic_initial_condition_is_exact() {
        assert_eq!(
            logistic_population(1000.0, 0.2, 10000.0, 0.0).unwrap(),
            1000
        );
        // k == n: the denominator at t = 0 is exactly k.
        assert_eq!(logistic_population(500.0, 1.3, 500.0, 0.0).unwrap(), 500);
    }

    #[test]
    fn logistic_saturates_at_carrying_capacity() {
        assert_eq!(
            logistic_population(1000.0, 0.2, 10000.0, 70.0).unwrap(),
            10000
        );
    }

    #[test]
    fn logistic_rejects_nonpositive_denominator() {
        // k < n with negative growth drives the denominator below zero.
        let result = logistic_population(200.0, -3.0, 100.0, 2.0);
        assert_eq!(
            result,
            Err(SimulationError::InvalidModelState(
                "logistic denominator is zero or negative"
            ))
        );
    }

    #[test]
    fn waste_concentration_matches_hand_computed_value() {
        // round(100 · e^-0.25) = round(77.88) = 78
        assert_eq!(waste_concentration(100.0, 0.25, 1.0).unwrap(), 78);
    }

    #[test]
    fn waste_concentration_rounds_to_exact_zero() {
        assert_eq!(waste_concentration(100.0, 0.25, 30.0).unwrap(), 0);
    }

    #[test]
    fn oxygen_deficit_matches_hand_computed_value() {
        // (0.25·100/0.15)·(e^-0.25 − e^-0.4) + 20·e^-0.4 = 31.49
        assert_eq!(oxygen_deficit(100.0, 20.0, 0.25, 0.4, 1.0).unwrap(), 31);
    }

    #[test]
    fn oxygen_deficit_rejects_coincident_rates() {
        let result = oxygen_deficit(100.0, 20.0, 0.25, 0.25, 1.0);
        assert_eq!(
            result,
            Err(SimulationError::InvalidModelState(
                "deoxygenation and reaeration rates coincide"
            ))
        );
    }

    #[test]
    fn travel_time_converts_metres_per_second_to_days_per_kilometre() {
        // 1 m/s = 3.6 km/h, so one kilometre takes 1/3.6 time units.
        let elapsed: f64 = travel_time(1.0, 1.0);
        assert!((elapsed - 1.0 / 3.6).abs() < 1e-12);
    }

    #[test]
    fn distance_domain_delegates_to_day_domain_formulas() {
        let elapsed = travel_time(1.0, 1.0);
        // round(100 · e^(-0.25 / 3.6)) = round(93.29) = 93
        assert_eq!(waste_concentration(100.0, 0.25, elapsed).unwrap(), 93);
    }
}
