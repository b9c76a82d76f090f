use serde::{Deserialize, Serialize};

/// Pipeline lifecycle. Forward-only: FAILED is terminal and reachable
/// from FETCHING and AGGREGATING; DONE only through AGGREGATING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunState {
    Pending,
    Fetching,
    Analyzing,
    Aggregating,
    Done,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Fetching => "FETCHING",
            Self::Analyzing => "ANALYZING",
            Self::Aggregating => "AGGREGATING",
            Self::Done => "DONE",
            Self::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}
