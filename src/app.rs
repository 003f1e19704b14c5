use std::sync::Arc;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::history::HistoryService;
use crate::services::intake::IntakeService;
use crate::services::profile::ProfileService;

/// Wiring of all services over one database pool. The embedding shell
/// (mobile UI, test harness) constructs this once and hands out clones.
#[derive(Clone)]
pub struct AppState {
    db_pool: DbPool,
    profile_service: Arc<ProfileService>,
    intake_service: Arc<IntakeService>,
    history_service: Arc<HistoryService>,
}

impl AppState {
    pub fn new(db_pool: DbPool) -> AppResult<Self> {
        let profile_service = Arc::new(ProfileService::new(db_pool.clone()));
        let intake_service = Arc::new(IntakeService::new(
            db_pool.clone(),
            Arc::clone(&profile_service),
        ));
        let history_service = Arc::new(HistoryService::new(
            db_pool.clone(),
            Arc::clone(&profile_service),
        ));

        Ok(Self {
            db_pool,
            profile_service,
            intake_service,
            history_service,
        })
    }

    pub fn intake(&self) -> Arc<IntakeService> {
        Arc::clone(&self.intake_service)
    }

    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile_service)
    }

    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history_service)
    }

    pub fn db(&self) -> DbPool {
        self.db_pool.clone()
    }
}
