//! End-to-end intake flow over a temporary database: log entries through
//! the service layer, then re-derive totals and progress from the store.

use chrono::Utc;
use hydrosnap_core::app::AppState;
use hydrosnap_core::db::repositories::drink_log_repository::DrinkLogRepository;
use hydrosnap_core::db::DbPool;
use hydrosnap_core::models::drink::{DrinkCandidate, DrinkSource, DrinkType};
use hydrosnap_core::models::profile::ProfileUpdateInput;
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

#[test]
fn fresh_day_totals_zero() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let total = state.intake().todays_total(&ctx).unwrap();
    assert_eq!(total, 0, "empty log should total zero");

    let progress = state.intake().todays_progress(&ctx).unwrap();
    assert_eq!(progress.consumed_ml, 0);
    assert_eq!(progress.ratio, 0.0);
    assert_eq!(progress.remaining_ml, progress.goal_ml);
}

#[test]
fn quick_add_logs_water_at_full_score() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let event = state.intake().log_water(&ctx, 250).unwrap();
    assert_eq!(event.drink_type, DrinkType::Water);
    assert_eq!(event.source, DrinkSource::QuickAction);
    assert_eq!(event.hydration_score, 1.0);

    assert_eq!(state.intake().todays_total(&ctx).unwrap(), 250);
}

#[test]
fn logged_drinks_aggregate_with_hydration_scores() {
    let (state, ctx, _temp_dir) = setup_test_env();
    let intake = state.intake();

    intake.log_water(&ctx, 500).unwrap();
    intake
        .log_drink(
            &ctx,
            DrinkCandidate {
                name: "Coffee".to_string(),
                volume_ml: 240,
                hydration_score: 0.85,
                caffeine_mg: Some(95),
                drink_type: Some(DrinkType::Coffee),
                source: None,
            },
        )
        .unwrap();

    // 500 + round-at-end(240 * 0.85) = 704
    assert_eq!(intake.todays_total(&ctx).unwrap(), 704);

    let entries = intake.todays_entries(&ctx).unwrap();
    assert_eq!(entries.len(), 2, "both entries should be stored");
}

#[test]
fn invalid_entries_are_rejected_and_not_stored() {
    let (state, ctx, _temp_dir) = setup_test_env();
    let intake = state.intake();

    let oversized = DrinkCandidate {
        name: "Bucket".to_string(),
        volume_ml: 2001,
        hydration_score: 1.0,
        caffeine_mg: None,
        drink_type: None,
        source: None,
    };
    let err = intake.log_drink(&ctx, oversized).unwrap_err();
    assert_eq!(err.code(), "INVALID_VOLUME");

    let bad_score = DrinkCandidate {
        name: "Mystery".to_string(),
        volume_ml: 250,
        hydration_score: 1.5,
        caffeine_mg: None,
        drink_type: None,
        source: None,
    };
    let err = intake.log_drink(&ctx, bad_score).unwrap_err();
    assert_eq!(err.code(), "INVALID_HYDRATION_SCORE");

    assert_eq!(intake.todays_total(&ctx).unwrap(), 0);
}

#[test]
fn described_drink_is_classified_and_logged() {
    let (state, ctx, _temp_dir) = setup_test_env();
    let intake = state.intake();

    let event = intake
        .log_described(&ctx, "300ml green tea")
        .unwrap()
        .expect("tea should classify");
    assert_eq!(event.drink_type, DrinkType::Tea);
    assert_eq!(event.volume_ml, 300);
    assert_eq!(event.source, DrinkSource::Ai);

    // 300 * 0.95 = 285
    assert_eq!(intake.todays_total(&ctx).unwrap(), 285);
}

#[test]
fn unclassifiable_description_logs_nothing() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let result = state
        .intake()
        .log_described(&ctx, "xyz unknown beverage")
        .unwrap();
    assert!(result.is_none(), "miss should fall back to manual entry");
    assert_eq!(state.intake().todays_total(&ctx).unwrap(), 0);
}

#[test]
fn progress_uses_profile_goal_and_never_clamps_total() {
    let (state, ctx, _temp_dir) = setup_test_env();

    state
        .profile()
        .update(
            &ctx,
            ProfileUpdateInput {
                daily_goal_ml: Some(1000),
                ..Default::default()
            },
        )
        .unwrap();

    let intake = state.intake();
    intake.log_water(&ctx, 750).unwrap();
    intake.log_water(&ctx, 750).unwrap();

    // Overshoot: totals stay real, only the ratio clamps.
    assert_eq!(intake.todays_total(&ctx).unwrap(), 1500);

    let progress = intake.todays_progress(&ctx).unwrap();
    assert_eq!(progress.goal_ml, 1000);
    assert_eq!(progress.consumed_ml, 1500);
    assert_eq!(progress.ratio, 1.0);
    assert_eq!(progress.remaining_ml, 0);
}

#[test]
fn entries_are_scoped_to_the_session_user() {
    let (state, ctx, _temp_dir) = setup_test_env();
    let other = SessionContext::new(Uuid::new_v4());

    state.intake().log_water(&ctx, 500).unwrap();

    assert_eq!(state.intake().todays_total(&ctx).unwrap(), 500);
    assert_eq!(
        state.intake().todays_total(&other).unwrap(),
        0,
        "another user's ledger must stay empty"
    );
}

#[test]
fn stored_events_can_be_fetched_by_id() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let logged = state.intake().log_water(&ctx, 400).unwrap();
    let fetched = state
        .db()
        .with_connection(|conn| DrinkLogRepository::find_by_id(conn, &logged.id))
        .unwrap();
    assert_eq!(fetched, logged);

    let missing = state
        .db()
        .with_connection(|conn| DrinkLogRepository::find_by_id(conn, "no-such-id"))
        .unwrap_err();
    assert_eq!(missing.code(), "NOT_FOUND");
}

#[test]
fn calls_without_a_session_are_rejected() {
    let err = SessionContext::require(None).unwrap_err();
    assert_eq!(err.code(), "NOT_AUTHENTICATED");

    let ctx = SessionContext::new(Uuid::new_v4());
    assert_eq!(SessionContext::require(Some(ctx)).unwrap(), ctx);
}

#[test]
fn logged_events_carry_todays_date() {
    let (state, ctx, _temp_dir) = setup_test_env();

    let event = state.intake().log_water(&ctx, 250).unwrap();
    assert_eq!(event.date, Utc::now().date_naive());
    assert_eq!(event.user_id, ctx.user_id_str());
}
