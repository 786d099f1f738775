use axum::{Json, extract::State};

use crate::{
    dto::dashboard::Dashboard,
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::dashboard_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Landing view for the session's role", body = ApiResponse<Dashboard>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<Dashboard>>> {
    let resp = dashboard_service::dashboard(&state, &user)?;
    Ok(Json(resp))
}
