use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DrinkType {
    Water,
    Coffee,
    Tea,
    Juice,
    Other,
}

impl DrinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkType::Water => "water",
            DrinkType::Coffee => "coffee",
            DrinkType::Tea => "tea",
            DrinkType::Juice => "juice",
            DrinkType::Other => "other",
        }
    }
}

impl fmt::Display for DrinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DrinkType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "water" => Ok(DrinkType::Water),
            "coffee" => Ok(DrinkType::Coffee),
            "tea" => Ok(DrinkType::Tea),
            "juice" => Ok(DrinkType::Juice),
            "other" => Ok(DrinkType::Other),
            other => Err(format!("unsupported drink type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrinkSource {
    QuickAction,
    Manual,
    Ai,
}

impl DrinkSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkSource::QuickAction => "quick_action",
            DrinkSource::Manual => "manual",
            DrinkSource::Ai => "ai",
        }
    }
}

impl fmt::Display for DrinkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DrinkSource {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "quick_action" => Ok(DrinkSource::QuickAction),
            "manual" => Ok(DrinkSource::Manual),
            "ai" => Ok(DrinkSource::Ai),
            other => Err(format!("unsupported drink source: {other}")),
        }
    }
}

/// A logged consumption entry as persisted in `drinks_log`. Immutable once
/// written; the daily total is always re-derived from these rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrinkEvent {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub volume_ml: i64,
    pub hydration_score: f64,
    pub caffeine_mg: i64,
    pub drink_type: DrinkType,
    pub source: DrinkSource,
    pub logged_at: String,
    pub date: NaiveDate,
}

/// User-supplied entry before validation. Optional fields are defaulted by
/// the ledger (`caffeine_mg` 0, `drink_type` other, `source` manual).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkCandidate {
    pub name: String,
    pub volume_ml: i64,
    pub hydration_score: f64,
    #[serde(default)]
    pub caffeine_mg: Option<i64>,
    #[serde(default)]
    pub drink_type: Option<DrinkType>,
    #[serde(default)]
    pub source: Option<DrinkSource>,
}

/// A candidate that passed ledger validation, ready for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDrink {
    pub name: String,
    pub volume_ml: i64,
    pub hydration_score: f64,
    pub caffeine_mg: i64,
    pub drink_type: DrinkType,
    pub source: DrinkSource,
}
