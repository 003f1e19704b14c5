//! History aggregation over a temporary database, with events written on
//! explicit past dates through the repository.

use chrono::NaiveDate;
use hydrosnap_core::app::AppState;
use hydrosnap_core::db::repositories::drink_log_repository::DrinkLogRepository;
use hydrosnap_core::db::DbPool;
use hydrosnap_core::models::drink::{DrinkEvent, DrinkSource, DrinkType};
use hydrosnap_core::models::profile::{OnboardingAnswers, ProfileUpdateInput};
use hydrosnap_core::models::session::SessionContext;
use tempfile::{tempdir, TempDir};
use uuid::Uuid;

fn setup_test_env() -> (AppState, SessionContext, TempDir) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("test.db");
    let db = DbPool::new(&db_path).expect("Failed to create test database");
    let state = AppState::new(db).expect("Failed to create AppState");
    let ctx = SessionContext::new(Uuid::new_v4());

    (state, ctx, temp_dir)
}

fn insert_water(state: &AppState, ctx: &SessionContext, date: NaiveDate, volume_ml: i64) {
    let event = DrinkEvent {
        id: Uuid::new_v4().to_string(),
        user_id: ctx.user_id_str(),
        name: "Water".to_string(),
        volume_ml,
        hydration_score: 1.0,
        caffeine_mg: 0,
        drink_type: DrinkType::Water,
        source: DrinkSource::Manual,
        logged_at: format!("{date}T09:00:00+00:00"),
        date,
    };

    state
        .db()
        .with_connection(|conn| DrinkLogRepository::insert(conn, &event))
        .expect("insert should succeed");
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

#[test]
fn day_summaries_zero_fill_empty_days() {
    let (state, ctx, _temp_dir) = setup_test_env();

    insert_water(&state, &ctx, date(10), 2000);
    insert_water(&state, &ctx, date(12), 1500);

    let summaries = state
        .history()
        .day_summaries(&ctx, date(10), date(13))
        .unwrap();

    assert_eq!(summaries.len(), 4, "one summary per day in range");
    assert_eq!(summaries[0].total_ml, 2000);
    assert_eq!(summaries[1].total_ml, 0, "empty day should be zero-filled");
    assert_eq!(summaries[2].total_ml, 1500);
    assert_eq!(summaries[3].total_ml, 0);
    assert_eq!(summaries[0].entry_count, 1);
    assert_eq!(summaries[1].entry_count, 0);
}

#[test]
fn day_summaries_reject_inverted_range() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let err = state
        .history()
        .day_summaries(&ctx, date(13), date(10))
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[test]
fn weekly_summary_reports_chart_figures() {
    let (state, ctx, _temp_dir) = setup_test_env();

    state
        .profile()
        .update(
            &ctx,
            ProfileUpdateInput {
                daily_goal_ml: Some(2000),
                ..Default::default()
            },
        )
        .unwrap();

    // Mon..Sun starting 2025-03-10; three days hit the 2000 ml goal.
    insert_water(&state, &ctx, date(10), 2100);
    insert_water(&state, &ctx, date(11), 2500);
    insert_water(&state, &ctx, date(12), 1800);
    insert_water(&state, &ctx, date(14), 2800);

    let summary = state.history().weekly_summary(&ctx, date(10)).unwrap();

    assert_eq!(summary.week_start, date(10));
    assert_eq!(summary.week_end, date(16));
    assert_eq!(summary.days.len(), 7);
    assert_eq!(summary.goal_ml, 2000);
    assert_eq!(summary.best_day_ml, 2800);
    assert_eq!(summary.goal_hit_count, 3);
    // (2100 + 2500 + 1800 + 2800) / 7 = 1314.28... -> 1314
    assert_eq!(summary.average_ml, 1314);
}

#[test]
fn weekly_summary_handles_an_empty_week() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let summary = state.history().weekly_summary(&ctx, date(10)).unwrap();

    assert_eq!(summary.days.len(), 7);
    assert_eq!(summary.average_ml, 0);
    assert_eq!(summary.best_day_ml, 0);
    assert_eq!(summary.goal_hit_count, 0);
}

#[test]
fn profile_defaults_then_updates_persist() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let profile = state.profile().get(&ctx).unwrap();
    assert_eq!(profile.daily_goal_ml, 2500, "default goal");
    assert!(!profile.onboarding_completed);

    state
        .profile()
        .update(
            &ctx,
            ProfileUpdateInput {
                daily_goal_ml: Some(3000),
                ..Default::default()
            },
        )
        .unwrap();

    // Re-read through a fresh state to bypass the in-memory cache.
    let fresh = AppState::new(state.db()).unwrap();
    let profile = fresh.profile().get(&ctx).unwrap();
    assert_eq!(profile.daily_goal_ml, 3000);
}

#[test]
fn profile_rejects_out_of_range_goal() {
    let (state, ctx, _temp_dir) = setup_test_env();

    for goal in [0, -500, 10_001] {
        let err = state
            .profile()
            .update(
                &ctx,
                ProfileUpdateInput {
                    daily_goal_ml: Some(goal),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_GOAL", "goal {goal} should be rejected");
    }
}

#[test]
fn profile_rejects_out_of_range_reminder_frequency() {
    let (state, ctx, _temp_dir) = setup_test_env();

    for minutes in [14, 241, 0, -30] {
        let err = state
            .profile()
            .update(
                &ctx,
                ProfileUpdateInput {
                    reminder_frequency_minutes: Some(minutes),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(
            err.code(),
            "VALIDATION_ERROR",
            "frequency {minutes} should be rejected"
        );
    }

    for minutes in [15, 240] {
        let profile = state
            .profile()
            .update(
                &ctx,
                ProfileUpdateInput {
                    reminder_frequency_minutes: Some(minutes),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(profile.reminder_frequency_minutes, minutes);
    }
}

#[test]
fn profile_rejects_blank_timezone() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let err = state
        .profile()
        .update(
            &ctx,
            ProfileUpdateInput {
                timezone: Some("   ".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");

    let profile = state
        .profile()
        .update(
            &ctx,
            ProfileUpdateInput {
                timezone: Some(" Europe/Berlin ".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(profile.timezone, "Europe/Berlin", "timezone should be trimmed");
}

#[test]
fn onboarding_records_quiz_answers() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let profile = state
        .profile()
        .complete_onboarding(
            &ctx,
            OnboardingAnswers {
                activity_level: "Very Active".to_string(),
                climate: "Hot".to_string(),
                primary_goal: "Boost Energy".to_string(),
            },
        )
        .unwrap();

    assert!(profile.onboarding_completed);
    assert_eq!(profile.activity_level.as_deref(), Some("Very Active"));
    assert_eq!(profile.climate.as_deref(), Some("Hot"));
    assert_eq!(profile.primary_goal.as_deref(), Some("Boost Energy"));
}
