use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::profile::{Profile, VolumeUnit};

#[derive(Debug, Clone)]
pub struct ProfileRow {
    pub user_id: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub daily_goal_ml: i64,
    pub activity_level: Option<String>,
    pub climate: Option<String>,
    pub primary_goal: Option<String>,
    pub reminder_frequency_minutes: i64,
    pub preferred_units: String,
    pub timezone: String,
    pub onboarding_completed: bool,
    pub premium_subscription: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl ProfileRow {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            email: profile.email.clone(),
            full_name: profile.full_name.clone(),
            daily_goal_ml: profile.daily_goal_ml,
            activity_level: profile.activity_level.clone(),
            climate: profile.climate.clone(),
            primary_goal: profile.primary_goal.clone(),
            reminder_frequency_minutes: profile.reminder_frequency_minutes,
            preferred_units: profile.preferred_units.as_str().to_string(),
            timezone: profile.timezone.clone(),
            onboarding_completed: profile.onboarding_completed,
            premium_subscription: profile.premium_subscription,
            created_at: profile.created_at.clone(),
            updated_at: profile.updated_at.clone(),
        }
    }

    pub fn into_profile(self) -> AppResult<Profile> {
        let preferred_units =
            VolumeUnit::try_from(self.preferred_units.as_str()).map_err(AppError::validation)?;

        Ok(Profile {
            user_id: self.user_id,
            email: self.email,
            full_name: self.full_name,
            daily_goal_ml: self.daily_goal_ml,
            activity_level: self.activity_level,
            climate: self.climate,
            primary_goal: self.primary_goal,
            reminder_frequency_minutes: self.reminder_frequency_minutes,
            preferred_units,
            timezone: self.timezone,
            onboarding_completed: self.onboarding_completed,
            premium_subscription: self.premium_subscription,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl TryFrom<&Row<'_>> for ProfileRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            email: row.get("email")?,
            full_name: row.get("full_name")?,
            daily_goal_ml: row.get("daily_goal_ml")?,
            activity_level: row.get("activity_level")?,
            climate: row.get("climate")?,
            primary_goal: row.get("primary_goal")?,
            reminder_frequency_minutes: row.get("reminder_frequency_minutes")?,
            preferred_units: row.get("preferred_units")?,
            timezone: row.get("timezone")?,
            onboarding_completed: row.get("onboarding_completed")?,
            premium_subscription: row.get("premium_subscription")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

pub struct ProfileRepository;

impl ProfileRepository {
    pub fn find_by_user(conn: &Connection, user_id: &str) -> AppResult<Option<Profile>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    user_id,
                    email,
                    full_name,
                    daily_goal_ml,
                    activity_level,
                    climate,
                    primary_goal,
                    reminder_frequency_minutes,
                    preferred_units,
                    timezone,
                    onboarding_completed,
                    premium_subscription,
                    created_at,
                    updated_at
                FROM profiles
                WHERE user_id = :user_id
            "#,
        )?;

        let row = stmt
            .query_row(named_params! {":user_id": user_id}, |row| {
                ProfileRow::try_from(row)
            })
            .optional()?;

        match row {
            Some(row) => Ok(Some(row.into_profile()?)),
            None => Ok(None),
        }
    }

    pub fn upsert(conn: &Connection, profile: &Profile) -> AppResult<()> {
        let row = ProfileRow::from_profile(profile);

        conn.execute(
            r#"
                INSERT INTO profiles (
                    user_id,
                    email,
                    full_name,
                    daily_goal_ml,
                    activity_level,
                    climate,
                    primary_goal,
                    reminder_frequency_minutes,
                    preferred_units,
                    timezone,
                    onboarding_completed,
                    premium_subscription,
                    created_at,
                    updated_at
                ) VALUES (
                    :user_id,
                    :email,
                    :full_name,
                    :daily_goal_ml,
                    :activity_level,
                    :climate,
                    :primary_goal,
                    :reminder_frequency_minutes,
                    :preferred_units,
                    :timezone,
                    :onboarding_completed,
                    :premium_subscription,
                    :created_at,
                    :updated_at
                )
                ON CONFLICT (user_id) DO UPDATE SET
                    email = excluded.email,
                    full_name = excluded.full_name,
                    daily_goal_ml = excluded.daily_goal_ml,
                    activity_level = excluded.activity_level,
                    climate = excluded.climate,
                    primary_goal = excluded.primary_goal,
                    reminder_frequency_minutes = excluded.reminder_frequency_minutes,
                    preferred_units = excluded.preferred_units,
                    timezone = excluded.timezone,
                    onboarding_completed = excluded.onboarding_completed,
                    premium_subscription = excluded.premium_subscription,
                    updated_at = excluded.updated_at
            "#,
            named_params! {
                ":user_id": &row.user_id,
                ":email": &row.email,
                ":full_name": &row.full_name,
                ":daily_goal_ml": &row.daily_goal_ml,
                ":activity_level": &row.activity_level,
                ":climate": &row.climate,
                ":primary_goal": &row.primary_goal,
                ":reminder_frequency_minutes": &row.reminder_frequency_minutes,
                ":preferred_units": &row.preferred_units,
                ":timezone": &row.timezone,
                ":onboarding_completed": &row.onboarding_completed,
                ":premium_subscription": &row.premium_subscription,
                ":created_at": &row.created_at,
                ":updated_at": &row.updated_at,
            },
        )?;

        Ok(())
    }
}
