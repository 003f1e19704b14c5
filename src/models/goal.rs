use serde::{Deserialize, Serialize};

/// Snapshot of a user's standing against their daily goal. `ratio` is
/// clamped to [0,1] even when intake overshoots the goal; `remaining_ml`
/// never goes negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_ml: i64,
    pub consumed_ml: i64,
    pub ratio: f64,
    pub remaining_ml: i64,
}

impl GoalProgress {
    pub fn goal_reached(&self) -> bool {
        self.remaining_ml == 0
    }
}
