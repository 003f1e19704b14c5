use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DAILY_GOAL_ML: i64 = 2500;
pub const DEFAULT_REMINDER_FREQUENCY_MINUTES: i64 = 90;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Ml,
    Oz,
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Ml => "ml",
            VolumeUnit::Oz => "oz",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for VolumeUnit {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ml" => Ok(VolumeUnit::Ml),
            "oz" => Ok(VolumeUnit::Oz),
            other => Err(format!("unsupported volume unit: {other}")),
        }
    }
}

/// Per-user settings row, mirroring the hosted store's `profiles` contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub daily_goal_ml: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_goal: Option<String>,
    pub reminder_frequency_minutes: i64,
    pub preferred_units: VolumeUnit,
    /// Display-side only; ledger days are always UTC calendar dates.
    pub timezone: String,
    pub onboarding_completed: bool,
    pub premium_subscription: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Profile {
    /// Defaults applied before a user has saved anything.
    pub fn defaults_for(user_id: &str, now_rfc3339: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            email: None,
            full_name: None,
            daily_goal_ml: DEFAULT_DAILY_GOAL_ML,
            activity_level: None,
            climate: None,
            primary_goal: None,
            reminder_frequency_minutes: DEFAULT_REMINDER_FREQUENCY_MINUTES,
            preferred_units: VolumeUnit::Ml,
            timezone: "UTC".to_string(),
            onboarding_completed: false,
            premium_subscription: false,
            created_at: now_rfc3339.to_string(),
            updated_at: now_rfc3339.to_string(),
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateInput {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub daily_goal_ml: Option<i64>,
    #[serde(default)]
    pub reminder_frequency_minutes: Option<i64>,
    #[serde(default)]
    pub preferred_units: Option<VolumeUnit>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub premium_subscription: Option<bool>,
}

/// Answers collected by the onboarding quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    pub activity_level: String,
    pub climate: String,
    pub primary_goal: String,
}
