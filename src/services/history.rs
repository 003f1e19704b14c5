use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::db::repositories::drink_log_repository::DrinkLogRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::session::SessionContext;
use crate::services::ledger;
use crate::services::profile::ProfileService;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_ml: i64,
    pub entry_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub days: Vec<DaySummary>,
    pub average_ml: i64,
    pub best_day_ml: i64,
    pub goal_ml: i64,
    pub goal_hit_count: usize,
}

/// Read-side aggregation for the history charts.
pub struct HistoryService {
    db: DbPool,
    profile_service: Arc<ProfileService>,
}

impl HistoryService {
    pub fn new(db: DbPool, profile_service: Arc<ProfileService>) -> Self {
        Self {
            db,
            profile_service,
        }
    }

    /// One summary per calendar day in the inclusive range, zero-filled for
    /// days without entries so charts keep a continuous axis.
    pub fn day_summaries(
        &self,
        ctx: &SessionContext,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<DaySummary>> {
        if from > to {
            return Err(AppError::validation_with_details(
                "date range start is after end",
                serde_json::json!({ "from": from.to_string(), "to": to.to_string() }),
            ));
        }

        let events = self.db.with_connection(|conn| {
            DrinkLogRepository::list_between(conn, &ctx.user_id_str(), from, to)
        })?;

        let mut by_date: HashMap<NaiveDate, Vec<_>> = HashMap::new();
        for event in events {
            by_date.entry(event.date).or_default().push(event);
        }

        let mut summaries = Vec::new();
        let mut date = from;
        while date <= to {
            let day_events = by_date.remove(&date).unwrap_or_default();
            summaries.push(DaySummary {
                date,
                total_ml: ledger::compute_daily_total(&day_events),
                entry_count: day_events.len(),
            });
            date += Duration::days(1);
        }

        Ok(summaries)
    }

    /// Seven days starting at `week_start`, with the aggregate figures the
    /// history tab renders (average, best day, goal-hit count).
    pub fn weekly_summary(
        &self,
        ctx: &SessionContext,
        week_start: NaiveDate,
    ) -> AppResult<WeeklySummary> {
        let week_end = week_start + Duration::days(6);
        let days = self.day_summaries(ctx, week_start, week_end)?;
        let profile = self.profile_service.get(ctx)?;

        let total: i64 = days.iter().map(|day| day.total_ml).sum();
        let average_ml = (total as f64 / days.len() as f64).round() as i64;
        let best_day_ml = days.iter().map(|day| day.total_ml).max().unwrap_or(0);
        let goal_hit_count = days
            .iter()
            .filter(|day| day.total_ml >= profile.daily_goal_ml)
            .count();

        Ok(WeeklySummary {
            week_start,
            week_end,
            days,
            average_ml,
            best_day_ml,
            goal_ml: profile.daily_goal_ml,
            goal_hit_count,
        })
    }
}
