//! Reciprocal rates

use crate::types::RateObservation;

/// Express every rate of `obs` in the opposite direction (`1 / rate`).
///
/// Zero rates are not rejected and come back as infinity.
pub fn invert(obs: &RateObservation) -> RateObservation {
    obs.iter()
        .map(|(code, rate)| (code.clone(), 1.0 / rate))
        .collect()
}
