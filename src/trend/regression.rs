//! Least-squares trend of a currency's rate over an ordered sequence
//!
//! The independent variable is the position in the sequence (`t_i = i`), not
//! the calendar distance between dates. The slope `b` of the fitted line
//! `y = a + b·t` is the trend; only its sign drives the recommendation.

use crate::signal::Signal;
use crate::types::RateObservation;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Fitted slope of rate against time index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Slope {
    /// Fewer than two usable points, or the fit is not finite
    Undetermined,
    Value(f64),
}

impl Slope {
    pub fn value(&self) -> Option<f64> {
        match self {
            Slope::Undetermined => None,
            Slope::Value(beta) => Some(*beta),
        }
    }

    pub fn is_determined(&self) -> bool {
        matches!(self, Slope::Value(_))
    }
}

impl From<Option<f64>> for Slope {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Slope::Undetermined, Slope::Value)
    }
}

impl From<Slope> for Option<f64> {
    fn from(slope: Slope) -> Self {
        slope.value()
    }
}

/// Slopes keyed by currency code
pub type Slopes = HashMap<String, Slope>;

/// How an observation lacking the requested currency enters the fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingRatePolicy {
    /// Use a rate of `0.0` at that position. Skews the slope, but matches
    /// the behavior of the upstream service.
    #[default]
    ZeroFill,
    /// Leave the position out of the fit; the other points keep their index
    Skip,
}

/// Slope of `currency` across `sequence`, filling missing rates with zero
pub fn slope(sequence: &[RateObservation], currency: &str) -> Slope {
    slope_with_policy(sequence, currency, MissingRatePolicy::ZeroFill)
}

/// Slope of `currency` across `sequence` under an explicit missing-rate policy
pub fn slope_with_policy(
    sequence: &[RateObservation],
    currency: &str,
    policy: MissingRatePolicy,
) -> Slope {
    let mut missing = 0usize;
    let points: Vec<(f64, f64)> = sequence
        .iter()
        .enumerate()
        .filter_map(|(i, obs)| match obs.get(currency) {
            Some(&rate) => Some((i as f64, rate)),
            None => {
                missing += 1;
                match policy {
                    MissingRatePolicy::ZeroFill => Some((i as f64, 0.0)),
                    MissingRatePolicy::Skip => None,
                }
            }
        })
        .collect();

    if missing > 0 {
        log::warn!(
            "{} of {} observations lack a {} rate ({:?})",
            missing,
            sequence.len(),
            currency,
            policy
        );
    }

    let slope = least_squares_slope(&points);
    if !slope.is_determined() {
        log::debug!(
            "No trend for {}: {} usable points",
            currency,
            points.len()
        );
    }
    slope
}

/// Slopes for several currencies over the same sequence
pub fn slopes<S: AsRef<str>>(sequence: &[RateObservation], currencies: &[S]) -> Slopes {
    currencies
        .iter()
        .map(|c| (c.as_ref().to_string(), slope(sequence, c.as_ref())))
        .collect()
}

/// Recommendation for `currency` from the sign of its slope
pub fn classify(sequence: &[RateObservation], currency: &str) -> Signal {
    Signal::from_slope(slope(sequence, currency))
}

// Rates are measured from the first point's value: the slope is unchanged by
// the shift and a constant series gives an exact zero numerator.
fn least_squares_slope(points: &[(f64, f64)]) -> Slope {
    if points.len() < 2 {
        return Slope::Undetermined;
    }

    let n = points.len() as f64;
    let t_mean = points.iter().map(|(t, _)| t).sum::<f64>() / n;
    let y_origin = points[0].1;

    let (s_ty, s_tt) = points.iter().fold((0.0, 0.0), |(s_ty, s_tt), &(t, y)| {
        let dt = t - t_mean;
        (s_ty + dt * (y - y_origin), s_tt + dt * dt)
    });

    let beta = s_ty / s_tt;
    if !beta.is_finite() {
        Slope::Undetermined
    } else {
        Slope::Value(beta)
    }
}
