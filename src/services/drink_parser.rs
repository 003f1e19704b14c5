use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::drink::{DrinkCandidate, DrinkSource, DrinkType};

const OZ_TO_ML: f64 = 29.5735;

static VOLUME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s*(ml|milliliters?|oz|ounces?)").expect("volume pattern is valid")
});

/// Defaults assumed when a description names a beverage without a quantity.
/// Order matters: the first keyword found in the description wins, so
/// "iced coffee with juice" classifies as coffee.
#[derive(Debug, Clone, Copy)]
pub struct DrinkProfile {
    pub keyword: &'static str,
    pub display_name: &'static str,
    pub default_volume_ml: i64,
    pub hydration_score: f64,
    pub caffeine_mg: i64,
    pub drink_type: DrinkType,
}

pub const DRINK_CATALOG: &[DrinkProfile] = &[
    DrinkProfile {
        keyword: "coffee",
        display_name: "Coffee",
        default_volume_ml: 240,
        hydration_score: 0.85,
        caffeine_mg: 95,
        drink_type: DrinkType::Coffee,
    },
    DrinkProfile {
        keyword: "tea",
        display_name: "Tea",
        default_volume_ml: 240,
        hydration_score: 0.95,
        caffeine_mg: 25,
        drink_type: DrinkType::Tea,
    },
    DrinkProfile {
        keyword: "water",
        display_name: "Water",
        default_volume_ml: 250,
        hydration_score: 1.0,
        caffeine_mg: 0,
        drink_type: DrinkType::Water,
    },
    DrinkProfile {
        keyword: "juice",
        display_name: "Fruit Juice",
        default_volume_ml: 200,
        hydration_score: 0.7,
        caffeine_mg: 0,
        drink_type: DrinkType::Juice,
    },
];

/// Deterministic best-guess classification of a free-text drink
/// description. Returns `None` when no known beverage keyword appears; the
/// caller falls back to manual entry. The "thinking" delay shown in the UI
/// is staged by the caller; classification itself is synchronous.
pub fn classify_free_text(description: &str) -> Option<DrinkCandidate> {
    let lowered = description.to_lowercase();

    let profile = DRINK_CATALOG
        .iter()
        .find(|profile| lowered.contains(profile.keyword))?;

    let volume_ml = extract_volume_ml(description).unwrap_or(profile.default_volume_ml);

    debug!(
        target: "app::parser",
        keyword = profile.keyword,
        volume_ml,
        "classified drink description"
    );

    Some(DrinkCandidate {
        name: profile.display_name.to_string(),
        volume_ml,
        hydration_score: profile.hydration_score,
        caffeine_mg: Some(profile.caffeine_mg),
        drink_type: Some(profile.drink_type),
        source: Some(DrinkSource::Ai),
    })
}

/// Pull an explicit quantity out of the text, converting ounces to
/// milliliters at the standard 29.5735 ml/oz.
pub fn extract_volume_ml(text: &str) -> Option<i64> {
    let captures = VOLUME_RE.captures(text)?;
    let value: i64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str().to_lowercase();

    if unit.starts_with("oz") || unit.starts_with("ounce") {
        Some((value as f64 * OZ_TO_ML).round() as i64)
    } else {
        Some(value)
    }
}
