use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-step scale used for both mood and energy check-ins. Ephemeral UI
/// state; never written to the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Low,
    Medium,
    High,
}

impl MoodLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLevel::Low => "low",
            MoodLevel::Medium => "medium",
            MoodLevel::High => "high",
        }
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MoodLevel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(MoodLevel::Low),
            "medium" => Ok(MoodLevel::Medium),
            "high" => Ok(MoodLevel::High),
            other => Err(format!("unsupported mood level: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEnergyState {
    pub mood: MoodLevel,
    pub energy: MoodLevel,
}

impl Default for MoodEnergyState {
    fn default() -> Self {
        Self {
            mood: MoodLevel::Medium,
            energy: MoodLevel::Medium,
        }
    }
}
