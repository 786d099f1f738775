use crate::{
    audit::log_audit,
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest},
    error::{AppError, AppResult},
    models::{AccountView, Role},
    response::{ApiResponse, Meta},
    state::AppState,
    store::{SessionUser, StoreError},
};

pub fn register(
    state: &AppState,
    role: Role,
    payload: RegisterRequest,
) -> AppResult<ApiResponse<AccountView>> {
    let account = payload.into_account(role)?;
    let mut market = state.market()?;
    let view = market.register(account)?.view();

    log_audit(
        Some(&view.name),
        "account_register",
        Some(role.as_str()),
        Some(serde_json::json!({ "email": view.email })),
    );

    let message = match role {
        Role::Shopkeeper => "Shop registered successfully! Please login.",
        Role::Customer => "Account created successfully! Please login.",
        Role::Delivery => "Application submitted successfully! Please login.",
    };
    Ok(ApiResponse::success(message, view, Some(Meta::empty())))
}

pub fn login(
    state: &AppState,
    role: Role,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { email, password } = payload;
    let mut market = state.market()?;
    let user = match market.login(role, &email, &password) {
        Ok(user) => user.clone(),
        Err(err @ StoreError::InvalidCredentials) => {
            tracing::info!(%role, %email, "login rejected");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    log_audit(
        Some(&user.name),
        "login",
        Some(role.as_str()),
        Some(serde_json::json!({ "session_id": user.session_id })),
    );

    Ok(ApiResponse::success(
        "Login successful!",
        LoginResponse { user },
        Some(Meta::empty()),
    ))
}

pub fn logout(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    let mut market = state.market()?;
    let ended = market.logout();
    if let Some(user) = &ended {
        log_audit(
            Some(&user.name),
            "logout",
            Some(user.role.as_str()),
            Some(serde_json::json!({ "session_id": user.session_id })),
        );
    }

    Ok(ApiResponse::success(
        "You have been logged out successfully.",
        serde_json::json!({ "ended": ended.is_some() }),
        Some(Meta::empty()),
    ))
}

pub fn current_session(state: &AppState) -> AppResult<ApiResponse<SessionUser>> {
    let market = state.market()?;
    let user = market.current_user().cloned().ok_or(AppError::Unauthorized)?;
    Ok(ApiResponse::success("Session", user, Some(Meta::empty())))
}
