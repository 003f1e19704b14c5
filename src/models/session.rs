use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Identity of the signed-in user, passed explicitly into every call that
/// touches the store. The auth flow itself lives outside this crate; a call
/// made without a session surfaces `NotAuthenticated` at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: Uuid,
}

impl SessionContext {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    pub fn user_id_str(&self) -> String {
        self.user_id.to_string()
    }

    /// Boundary guard for shells that may not have a signed-in user yet.
    pub fn require(session: Option<Self>) -> AppResult<Self> {
        session.ok_or_else(AppError::not_authenticated)
    }
}
