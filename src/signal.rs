//! Convert/hold recommendation signals

use crate::trend::Slope;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation derived from the direction of the rate trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Rate trending down: convert now
    #[serde(rename = "convert")]
    Convert,
    /// Rate trending up: wait
    #[serde(rename = "don't convert")]
    NoConvert,
    /// No detectable trend
    #[serde(rename = "neutral")]
    Neutral,
}

impl Signal {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Convert => "convert",
            Signal::NoConvert => "don't convert",
            Signal::Neutral => "neutral",
        }
    }

    /// Map a fitted slope onto a signal.
    ///
    /// Positive slopes mean the rate is rising, so holding is favoured.
    /// Zero, `NaN` and undetermined slopes are neutral.
    pub fn from_slope(slope: Slope) -> Self {
        match slope.value() {
            Some(beta) if beta > 0.0 => Signal::NoConvert,
            Some(beta) if beta < 0.0 => Signal::Convert,
            _ => Signal::Neutral,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_mapping() {
        assert_eq!(Signal::from_slope(Slope::Value(0.0004)), Signal::NoConvert);
        assert_eq!(Signal::from_slope(Slope::Value(-0.0009)), Signal::Convert);
        assert_eq!(Signal::from_slope(Slope::Value(0.0)), Signal::Neutral);
        assert_eq!(Signal::from_slope(Slope::Value(-0.0)), Signal::Neutral);
        assert_eq!(Signal::from_slope(Slope::Value(f64::NAN)), Signal::Neutral);
        assert_eq!(Signal::from_slope(Slope::Undetermined), Signal::Neutral);
    }

    #[test]
    fn test_signal_wire_strings() {
        assert_eq!(serde_json::to_string(&Signal::Convert).unwrap(), "\"convert\"");
        assert_eq!(
            serde_json::to_string(&Signal::NoConvert).unwrap(),
            "\"don't convert\""
        );
        assert_eq!(serde_json::to_string(&Signal::Neutral).unwrap(), "\"neutral\"");

        let parsed: Signal = serde_json::from_str("\"don't convert\"").unwrap();
        assert_eq!(parsed, Signal::NoConvert);
        assert_eq!(Signal::Neutral.to_string(), "neutral");
    }
}
