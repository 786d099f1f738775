use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};

use crate::{
    dto::orders::{CheckoutRequest, OrderDetail, UpdateOrderStatusRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::OrderId,
    response::ApiResponse,
    routes::params::OrderListQuery,
    services::order_service,
    state::AppState,
    store::OrderBoard,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/checkout", post(checkout))
        .route("/{id}", get(get_order))
        .route("/{id}/status", patch(update_order_status))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Orders visible to the session, split into active and delivered", body = ApiResponse<OrderBoard>),
        (status = 401, description = "Not logged in")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderBoard>>> {
    let resp = order_service::list_orders(&state, &user, query)?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Place the cart as an order", body = ApiResponse<OrderDetail>),
        (status = 400, description = "Empty cart, mixed shops, missing field or delivery time too soon"),
        (status = 403, description = "Not a customer")
    ),
    tag = "Orders"
)]
pub async fn checkout(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let resp = order_service::checkout(&state, &user, payload)?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = u32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with total", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order not found or not visible"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<OrderId>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let resp = order_service::get_order(&state, &user, id)?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    params(
        ("id" = u32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Advance order status", body = ApiResponse<OrderDetail>),
        (status = 403, description = "Role may not set this status, or order belongs to another shop"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Not a forward single-step transition"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<OrderId>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<OrderDetail>>> {
    let resp = order_service::update_order_status(&state, &user, id, payload)?;
    Ok(Json(resp))
}
