//! Bias classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a sender's estimation bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimation {
    Overestimated,
    Underestimated,
    Accurate,
}

impl Estimation {
    /// Phrase embedded in the incentives sentence.
    pub fn phrase(&self) -> &'static str {
        match self {
            Estimation::Overestimated => "overestimated",
            Estimation::Underestimated => "underestimated",
            Estimation::Accurate => "accurately estimated",
        }
    }
}

impl fmt::Display for Estimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Classify a bias value.
///
/// NaN compares false on both branches and falls through to `Accurate`.
pub fn classify(bias: f64) -> Estimation {
    if bias > 0.0 {
        Estimation::Overestimated
    } else if bias < 0.0 {
        Estimation::Underestimated
    } else {
        Estimation::Accurate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_bias_is_overestimated() {
        assert_eq!(classify(5.0), Estimation::Overestimated);
    }

    #[test]
    fn negative_bias_is_underestimated() {
        assert_eq!(classify(-3.0), Estimation::Underestimated);
    }

    #[test]
    fn zero_bias_is_accurate() {
        assert_eq!(classify(0.0), Estimation::Accurate);
        assert_eq!(classify(-0.0), Estimation::Accurate);
    }

    #[test]
    fn nan_falls_through_to_accurate() {
        assert_eq!(classify(f64::NAN), Estimation::Accurate);
    }

    #[test]
    fn phrases_match_display() {
        assert_eq!(Estimation::Overestimated.to_string(), "overestimated");
        assert_eq!(Estimation::Underestimated.to_string(), "underestimated");
        assert_eq!(Estimation::Accurate.to_string(), "accurately estimated");
    }
}
