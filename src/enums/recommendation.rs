use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "LOW RISK")]
    Low,
    #[serde(rename = "MEDIUM RISK")]
    Medium,
    #[serde(rename = "HIGH RISK")]
    High,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Recommendation {
    /// Band thresholds are closed below: 3.0 is MEDIUM, 6.0 is HIGH.
    /// UNKNOWN is never derived from a score; it is reserved for runs
    /// where no analyzer produced a usable verdict.
    pub fn from_score(score: f64) -> Self {
        if score < 3.0 {
            Self::Low
        } else if score < 6.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Medium => "MEDIUM RISK",
            Self::High => "HIGH RISK",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🔴",
            Self::Unknown => "⚪",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_closed_below() {
        assert_eq!(Recommendation::from_score(0.0), Recommendation::Low);
        assert_eq!(Recommendation::from_score(2.9), Recommendation::Low);
        assert_eq!(Recommendation::from_score(3.0), Recommendation::Medium);
        assert_eq!(Recommendation::from_score(5.9), Recommendation::Medium);
        assert_eq!(Recommendation::from_score(6.0), Recommendation::High);
        assert_eq!(Recommendation::from_score(10.0), Recommendation::High);
    }

    #[test]
    fn test_serializes_to_published_labels() {
        let json = serde_json::to_string(&Recommendation::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM RISK\"");
        let json = serde_json::to_string(&Recommendation::Unknown).unwrap();
        assert_eq!(json, "\"UNKNOWN\"");
    }
}
