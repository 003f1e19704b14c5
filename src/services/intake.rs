use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use crate::db::repositories::drink_log_repository::DrinkLogRepository;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::drink::{DrinkCandidate, DrinkEvent, DrinkSource, DrinkType};
use crate::models::goal::GoalProgress;
use crate::models::session::SessionContext;
use crate::services::drink_parser;
use crate::services::ledger;
use crate::services::profile::ProfileService;

/// Orchestrates drink logging: ledger validation in front, the drinks_log
/// repository behind. Totals are always re-derived from stored events and
/// never clamped to the goal; only the progress ratio is clamped.
pub struct IntakeService {
    db: DbPool,
    profile_service: Arc<ProfileService>,
}

impl IntakeService {
    pub fn new(db: DbPool, profile_service: Arc<ProfileService>) -> Self {
        Self {
            db,
            profile_service,
        }
    }

    /// Validate and persist a user-entered drink. Entries are bucketed by
    /// the UTC calendar date; the profile timezone only affects how the
    /// presentation layer renders times, never which ledger day a log
    /// lands on.
    pub fn log_drink(&self, ctx: &SessionContext, candidate: DrinkCandidate) -> AppResult<DrinkEvent> {
        let entry = ledger::validate_entry(candidate)?;
        let now = Utc::now();

        let event = DrinkEvent {
            id: Uuid::new_v4().to_string(),
            user_id: ctx.user_id_str(),
            name: entry.name,
            volume_ml: entry.volume_ml,
            hydration_score: entry.hydration_score,
            caffeine_mg: entry.caffeine_mg,
            drink_type: entry.drink_type,
            source: entry.source,
            logged_at: now.to_rfc3339(),
            date: now.date_naive(),
        };

        self.db
            .with_connection(|conn| DrinkLogRepository::insert(conn, &event))?;

        info!(
            target: "app::intake",
            id = %event.id,
            drink_type = %event.drink_type,
            source = %event.source,
            volume_ml = event.volume_ml,
            "drink logged"
        );

        Ok(event)
    }

    /// One-tap quick action: plain water at full hydration score.
    pub fn log_water(&self, ctx: &SessionContext, volume_ml: i64) -> AppResult<DrinkEvent> {
        self.log_drink(
            ctx,
            DrinkCandidate {
                name: "Water".to_string(),
                volume_ml,
                hydration_score: 1.0,
                caffeine_mg: Some(0),
                drink_type: Some(DrinkType::Water),
                source: Some(DrinkSource::QuickAction),
            },
        )
    }

    /// Classify a free-text description and log the best guess. `Ok(None)`
    /// means no beverage keyword matched and the caller should fall back to
    /// the manual form.
    pub fn log_described(
        &self,
        ctx: &SessionContext,
        description: &str,
    ) -> AppResult<Option<DrinkEvent>> {
        match drink_parser::classify_free_text(description) {
            Some(candidate) => self.log_drink(ctx, candidate).map(Some),
            None => Ok(None),
        }
    }

    /// The user's entries for one calendar date, newest first.
    pub fn entries_for_date(
        &self,
        ctx: &SessionContext,
        date: NaiveDate,
    ) -> AppResult<Vec<DrinkEvent>> {
        self.db
            .with_connection(|conn| DrinkLogRepository::list_for_date(conn, &ctx.user_id_str(), date))
    }

    /// Effective hydration for one date, derived from stored events.
    pub fn daily_total(&self, ctx: &SessionContext, date: NaiveDate) -> AppResult<i64> {
        let events = self.entries_for_date(ctx, date)?;
        Ok(ledger::compute_daily_total(&events))
    }

    /// Daily total joined with the profile goal.
    pub fn progress_for_date(
        &self,
        ctx: &SessionContext,
        date: NaiveDate,
    ) -> AppResult<GoalProgress> {
        let total = self.daily_total(ctx, date)?;
        let profile = self.profile_service.get(ctx)?;
        ledger::compute_progress(total, profile.daily_goal_ml)
    }

    /// Convenience wrappers over today's calendar date.
    pub fn todays_entries(&self, ctx: &SessionContext) -> AppResult<Vec<DrinkEvent>> {
        self.entries_for_date(ctx, Utc::now().date_naive())
    }

    pub fn todays_total(&self, ctx: &SessionContext) -> AppResult<i64> {
        self.daily_total(ctx, Utc::now().date_naive())
    }

    pub fn todays_progress(&self, ctx: &SessionContext) -> AppResult<GoalProgress> {
        self.progress_for_date(ctx, Utc::now().date_naive())
    }
}
