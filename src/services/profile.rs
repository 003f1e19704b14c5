use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::info;

use crate::db::repositories::profile_repository::ProfileRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::profile::{OnboardingAnswers, Profile, ProfileUpdateInput};
use crate::models::session::SessionContext;

/// Daily goals outside this range are treated as input mistakes.
const MAX_DAILY_GOAL_ML: i64 = 10_000;
const REMINDER_FREQUENCY_RANGE: std::ops::RangeInclusive<i64> = 15..=240;

/// Per-user profile settings with a read cache, defaulted on first access.
pub struct ProfileService {
    db: DbPool,
    cache: RwLock<HashMap<String, Profile>>,
}

impl ProfileService {
    pub fn new(db: DbPool) -> Self {
        Self {
            db,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// The user's profile, or defaults when nothing has been saved yet.
    /// Defaults are not persisted until the first update.
    pub fn get(&self, ctx: &SessionContext) -> AppResult<Profile> {
        let user_id = ctx.user_id_str();

        if let Ok(guard) = self.cache.read() {
            if let Some(profile) = guard.get(&user_id) {
                return Ok(profile.clone());
            }
        }

        let stored = self
            .db
            .with_connection(|conn| ProfileRepository::find_by_user(conn, &user_id))?;

        let profile =
            stored.unwrap_or_else(|| Profile::defaults_for(&user_id, &Utc::now().to_rfc3339()));

        if let Ok(mut guard) = self.cache.write() {
            guard.insert(user_id, profile.clone());
        }

        Ok(profile)
    }

    /// Apply a partial update, validating supplied fields, and persist.
    pub fn update(&self, ctx: &SessionContext, input: ProfileUpdateInput) -> AppResult<Profile> {
        let mut current = self.get(ctx)?;

        if let Some(goal_ml) = input.daily_goal_ml {
            if goal_ml <= 0 || goal_ml > MAX_DAILY_GOAL_ML {
                return Err(AppError::invalid_goal(goal_ml));
            }
            current.daily_goal_ml = goal_ml;
        }

        if let Some(frequency) = input.reminder_frequency_minutes {
            if !REMINDER_FREQUENCY_RANGE.contains(&frequency) {
                return Err(AppError::validation(format!(
                    "reminder frequency must be between {} and {} minutes, got {frequency}",
                    REMINDER_FREQUENCY_RANGE.start(),
                    REMINDER_FREQUENCY_RANGE.end()
                )));
            }
            current.reminder_frequency_minutes = frequency;
        }

        if let Some(units) = input.preferred_units {
            current.preferred_units = units;
        }

        if let Some(timezone) = input.timezone {
            let trimmed = timezone.trim();
            if trimmed.is_empty() {
                return Err(AppError::validation("timezone must not be empty"));
            }
            current.timezone = trimmed.to_string();
        }

        if let Some(email) = input.email {
            current.email = Some(email);
        }

        if let Some(full_name) = input.full_name {
            current.full_name = Some(full_name);
        }

        if let Some(premium) = input.premium_subscription {
            current.premium_subscription = premium;
        }

        current.updated_at = Utc::now().to_rfc3339();
        self.persist(current)
    }

    /// Record the onboarding quiz answers and mark onboarding complete.
    pub fn complete_onboarding(
        &self,
        ctx: &SessionContext,
        answers: OnboardingAnswers,
    ) -> AppResult<Profile> {
        let mut current = self.get(ctx)?;

        current.activity_level = Some(answers.activity_level);
        current.climate = Some(answers.climate);
        current.primary_goal = Some(answers.primary_goal);
        current.onboarding_completed = true;
        current.updated_at = Utc::now().to_rfc3339();

        info!(target: "app::profile", user_id = %current.user_id, "onboarding completed");

        self.persist(current)
    }

    fn persist(&self, profile: Profile) -> AppResult<Profile> {
        self.db
            .with_connection(|conn| ProfileRepository::upsert(conn, &profile))?;

        if let Ok(mut guard) = self.cache.write() {
            guard.insert(profile.user_id.clone(), profile.clone());
        }

        Ok(profile)
    }
}
