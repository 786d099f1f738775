use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    store::Marketplace,
};

#[derive(Clone)]
pub struct AppState {
    market: Arc<Mutex<Marketplace>>,
}

impl AppState {
    pub fn new(market: Marketplace) -> Self {
        Self {
            market: Arc::new(Mutex::new(market)),
        }
    }

    /// Never hold the guard across an `.await`.
    pub fn market(&self) -> AppResult<MutexGuard<'_, Marketplace>> {
        self.market
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("marketplace lock poisoned")))
    }

    /// Locks the marketplace for `user`, failing with `Unauthorized` when the
    /// session `user` was read from has since been replaced or ended.
    pub fn market_for(&self, user: &AuthUser) -> AppResult<MutexGuard<'_, Marketplace>> {
        let market = self.market()?;
        match market.current_user() {
            Some(current) if current.session_id == user.session_id => Ok(market),
            _ => {
                tracing::warn!(
                    user = %user.name,
                    session_id = %user.session_id,
                    "request made with a session that is no longer active"
                );
                Err(AppError::Unauthorized)
            }
        }
    }
}
