//! Piecewise-linear calibration of raw scores onto the 1–10 scale.

use serde::{Deserialize, Serialize};

/// Lowest calibrated score.
pub const MIN_SCORE: f64 = 1.0;

/// Highest calibrated score.
pub const MAX_SCORE: f64 = 10.0;

/// One (raw → calibrated) point of the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationKnot {
    pub input: f64,
    pub output: f64,
}

impl CalibrationKnot {
    pub const fn new(input: f64, output: f64) -> Self {
        Self { input, output }
    }
}

/// Monotone piecewise-linear map from raw score to relevance score.
///
/// Inputs below the first knot take the first output, inputs above the last
/// knot saturate at the last output. The result is always clamped to
/// [`MIN_SCORE`, `MAX_SCORE`], and non-finite inputs map to [`MIN_SCORE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCurve {
    pub knots: Vec<CalibrationKnot>,
}

impl Default for CalibrationCurve {
    fn default() -> Self {
        Self {
            knots: vec![
                CalibrationKnot::new(0.0, 1.0),
                CalibrationKnot::new(0.10, 3.5),
                CalibrationKnot::new(0.18, 5.0),
                CalibrationKnot::new(0.30, 6.5),
                CalibrationKnot::new(0.45, 8.0),
                CalibrationKnot::new(1.0, 10.0),
            ],
        }
    }
}

impl CalibrationCurve {
    pub fn new(knots: Vec<CalibrationKnot>) -> Self {
        Self { knots }
    }

    /// Map a raw score onto the calibrated scale.
    pub fn calibrate(&self, raw: f64) -> f64 {
        if !raw.is_finite() {
            return MIN_SCORE;
        }

        let (first, last) = match (self.knots.first(), self.knots.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return MIN_SCORE,
        };

        let value = if raw <= first.input {
            first.output
        } else if raw >= last.input {
            last.output
        } else {
            self.knots
                .windows(2)
                .find(|pair| raw <= pair[1].input)
                .map(|pair| interpolate(pair[0], pair[1], raw))
                .unwrap_or(last.output)
        };

        if value.is_finite() {
            value.clamp(MIN_SCORE, MAX_SCORE)
        } else {
            MIN_SCORE
        }
    }

    /// Check that the curve is usable.
    ///
    /// Requires at least two finite knots with strictly increasing inputs,
    /// non-decreasing outputs, and outputs inside the calibrated range.
    pub fn validate(&self) -> Result<(), String> {
        if self.knots.len() < 2 {
            return Err("calibration curve needs at least two knots".to_string());
        }
        for knot in &self.knots {
            if !knot.input.is_finite() || !knot.output.is_finite() {
                return Err("calibration knots must be finite".to_string());
            }
            if knot.output < MIN_SCORE || knot.output > MAX_SCORE {
                return Err(format!(
                    "calibration output {} is outside [{}, {}]",
                    knot.output, MIN_SCORE, MAX_SCORE
                ));
            }
        }
        for pair in self.knots.windows(2) {
            if pair[1].input <= pair[0].input {
                return Err("calibration knot inputs must be strictly increasing".to_string());
            }
            if pair[1].output < pair[0].output {
                return Err("calibration knot outputs must not decrease".to_string());
            }
        }
        Ok(())
    }
}

fn interpolate(lo: CalibrationKnot, hi: CalibrationKnot, raw: f64) -> f64 {
    let span = hi.input - lo.input;
    if span <= 0.0 {
        return hi.output;
    }
    lo.output + (raw - lo.input) / span * (hi.output - lo.output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_knots_map_exactly() {
        let curve = CalibrationCurve::default();
        for knot in &curve.knots {
            assert!(approx(curve.calibrate(knot.input), knot.output));
        }
    }

    #[test]
    fn test_interpolation() {
        let curve = CalibrationCurve::default();
        assert!(approx(curve.calibrate(0.05), 2.25));
        assert!(approx(curve.calibrate(0.14), 4.25));
        assert!(approx(curve.calibrate(0.725), 9.0));
    }

    #[test]
    fn test_saturation_and_floor() {
        let curve = CalibrationCurve::default();
        assert_eq!(curve.calibrate(1.3), 10.0);
        assert_eq!(curve.calibrate(1e300), 10.0);
        assert_eq!(curve.calibrate(-0.5), 1.0);
    }

    #[test]
    fn test_non_finite_inputs() {
        let curve = CalibrationCurve::default();
        assert_eq!(curve.calibrate(f64::NAN), 1.0);
        assert_eq!(curve.calibrate(f64::INFINITY), 1.0);
        assert_eq!(curve.calibrate(f64::NEG_INFINITY), 1.0);
    }

    #[test]
    fn test_monotone() {
        let curve = CalibrationCurve::default();
        let mut previous = curve.calibrate(0.0);
        for step in 1..=150 {
            let value = curve.calibrate(step as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_validate() {
        assert!(CalibrationCurve::default().validate().is_ok());
        assert!(CalibrationCurve::new(vec![CalibrationKnot::new(0.0, 1.0)])
            .validate()
            .is_err());
        assert!(CalibrationCurve::new(vec![
            CalibrationKnot::new(0.0, 1.0),
            CalibrationKnot::new(0.0, 5.0),
        ])
        .validate()
        .is_err());
        assert!(CalibrationCurve::new(vec![
            CalibrationKnot::new(0.0, 6.0),
            CalibrationKnot::new(0.5, 5.0),
        ])
        .validate()
        .is_err());
        assert!(CalibrationCurve::new(vec![
            CalibrationKnot::new(0.0, 0.0),
            CalibrationKnot::new(1.0, 10.0),
        ])
        .validate()
        .is_err());
    }

    #[test]
    fn test_empty_curve_never_panics() {
        assert_eq!(CalibrationCurve::new(vec![]).calibrate(0.7), 1.0);
    }
}
