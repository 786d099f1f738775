use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::Role,
    state::AppState,
    store::SessionUser,
};

/// The logged-in account, read from the marketplace session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub session_id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&SessionUser> for AuthUser {
    fn from(user: &SessionUser) -> Self {
        Self {
            session_id: user.session_id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

impl AuthUser {
    pub fn current(state: &AppState) -> AppResult<Self> {
        let market = state.market()?;
        market
            .current_user()
            .map(AuthUser::from)
            .ok_or(AppError::Unauthorized)
    }
}

pub fn ensure_role(user: &AuthUser, role: Role) -> Result<(), AppError> {
    if user.role != role {
        tracing::warn!(user = %user.name, has = %user.role, needs = %role, "role check failed");
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_customer(user: &AuthUser) -> Result<(), AppError> {
    ensure_role(user, Role::Customer)
}

pub fn ensure_shopkeeper(user: &AuthUser) -> Result<(), AppError> {
    ensure_role(user, Role::Shopkeeper)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::current(state)
    }
}
