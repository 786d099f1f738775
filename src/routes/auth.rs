use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest},
    error::AppResult,
    models::{AccountView, Role},
    response::ApiResponse,
    services::auth_service,
    state::AppState,
    store::SessionUser,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{role}/register", post(register))
        .route("/{role}/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
}

#[utoipa::path(
    post,
    path = "/api/auth/{role}/register",
    params(
        ("role" = Role, Path, description = "shopkeeper, customer or delivery")
    ),
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Register an account", body = ApiResponse<AccountView>),
        (status = 400, description = "Missing field"),
        (status = 409, description = "Email already registered for this role")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Path(role): Path<Role>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<ApiResponse<AccountView>>> {
    let resp = auth_service::register(&state, role, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/{role}/login",
    params(
        ("role" = Role, Path, description = "shopkeeper, customer or delivery")
    ),
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Start a session", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Path(role): Path<Role>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let resp = auth_service::login(&state, role, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "End the session", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = auth_service::logout(&state)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session", body = ApiResponse<SessionUser>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Auth"
)]
pub async fn session(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<SessionUser>>> {
    let resp = auth_service::current_session(&state)?;
    Ok(Json(resp))
}
