use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Content,
    Visual,
    Reputation,
}

impl AnalyzerKind {
    pub const ALL: [AnalyzerKind; 3] = [Self::Content, Self::Visual, Self::Reputation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Visual => "visual",
            Self::Reputation => "reputation",
        }
    }

    /// Key this analyzer occupies in the report findings object.
    pub fn findings_key(&self) -> &'static str {
        match self {
            Self::Content => "content_analysis",
            Self::Visual => "visual_analysis",
            Self::Reputation => "reputation_check",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
