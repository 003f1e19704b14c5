use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::drink::{DrinkCandidate, DrinkEvent, DrinkSource, DrinkType, NewDrink};
use crate::models::goal::GoalProgress;

/// Upper bound for a single logged entry. Larger amounts are almost
/// certainly a typo in the custom-amount field.
pub const MAX_ENTRY_VOLUME_ML: i64 = 2000;

/// Sum of `volume_ml * hydration_score` over the given events, rounded to
/// whole milliliters once at the end. Empty input yields 0.
pub fn compute_daily_total(events: &[DrinkEvent]) -> i64 {
    let effective: f64 = events
        .iter()
        .map(|event| event.volume_ml as f64 * event.hydration_score)
        .sum();
    effective.round() as i64
}

/// Hydration-adjusted volume of one entry, rounded to whole milliliters.
pub fn effective_volume_ml(volume_ml: i64, hydration_score: f64) -> i64 {
    (volume_ml as f64 * hydration_score).round() as i64
}

/// Progress against the daily goal. The ratio is clamped to [0,1] no matter
/// how far intake overshoots; remaining never goes negative.
pub fn compute_progress(daily_total_ml: i64, goal_ml: i64) -> AppResult<GoalProgress> {
    if goal_ml <= 0 {
        return Err(AppError::invalid_goal(goal_ml));
    }

    let ratio = (daily_total_ml as f64 / goal_ml as f64).clamp(0.0, 1.0);
    let remaining_ml = (goal_ml - daily_total_ml).max(0);

    Ok(GoalProgress {
        goal_ml,
        consumed_ml: daily_total_ml,
        ratio,
        remaining_ml,
    })
}

/// Admit a user-supplied entry into the ledger: bounds-check volume and
/// hydration score, trim the name, and fill in defaulted optional fields.
pub fn validate_entry(candidate: DrinkCandidate) -> AppResult<NewDrink> {
    if candidate.volume_ml <= 0 || candidate.volume_ml > MAX_ENTRY_VOLUME_ML {
        return Err(AppError::invalid_volume(
            candidate.volume_ml,
            MAX_ENTRY_VOLUME_ML,
        ));
    }

    if !candidate.hydration_score.is_finite()
        || candidate.hydration_score < 0.0
        || candidate.hydration_score > 1.0
    {
        return Err(AppError::invalid_hydration_score(candidate.hydration_score));
    }

    let name = candidate.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("drink name must not be empty"));
    }

    let caffeine_mg = candidate.caffeine_mg.unwrap_or(0);
    if caffeine_mg < 0 {
        return Err(AppError::validation(format!(
            "caffeine must be non-negative, got {caffeine_mg}"
        )));
    }

    let entry = NewDrink {
        name: name.to_string(),
        volume_ml: candidate.volume_ml,
        hydration_score: candidate.hydration_score,
        caffeine_mg,
        drink_type: candidate.drink_type.unwrap_or(DrinkType::Other),
        source: candidate.source.unwrap_or(DrinkSource::Manual),
    };

    debug!(
        target: "app::ledger",
        name = %entry.name,
        volume_ml = entry.volume_ml,
        hydration_score = entry.hydration_score,
        "entry admitted"
    );

    Ok(entry)
}
