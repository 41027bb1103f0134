use serde::{Deserialize, Serialize};

/// Where a measured value sits relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    Below,
    Within,
    Above,
}

impl RangeStatus {
    /// Classify a value against optional range bounds.
    ///
    /// Returns `None` when either bound is missing: there is nothing to
    /// compare against. Bounds are inclusive and taken as stored; no
    /// plausibility checking happens here.
    pub fn classify(value: f64, min: Option<f64>, max: Option<f64>) -> Option<RangeStatus> {
        let (min, max) = (min?, max?);
        if value < min {
            Some(RangeStatus::Below)
        } else if value > max {
            Some(RangeStatus::Above)
        } else {
            Some(RangeStatus::Within)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Below => "below",
            RangeStatus::Within => "within",
            RangeStatus::Above => "above",
        }
    }

    pub fn is_within(&self) -> bool {
        matches!(self, RangeStatus::Within)
    }
}

impl std::fmt::Display for RangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
