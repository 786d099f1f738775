use crate::{
    audit::log_audit,
    dto::orders::{CheckoutRequest, OrderDetail, UpdateOrderStatusRequest},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_customer},
    models::{Order, OrderId, OrderStatus, Role},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    state::AppState,
    store::{OrderBoard, OrderLedger},
};

/// Orders the user may see: a shop's own orders, a customer's own orders, or
/// every order for delivery accounts.
fn visible_to<'a>(
    ledger: &'a OrderLedger,
    user: &'a AuthUser,
) -> Box<dyn Iterator<Item = &'a Order> + 'a> {
    match user.role {
        Role::Shopkeeper => Box::new(ledger.for_shop(&user.name)),
        Role::Customer => Box::new(ledger.for_customer(&user.email)),
        Role::Delivery => Box::new(ledger.all()),
    }
}

pub fn board_for(ledger: &OrderLedger, user: &AuthUser) -> OrderBoard {
    OrderBoard::from_orders(visible_to(ledger, user))
}

pub fn list_orders(
    state: &AppState,
    user: &AuthUser,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderBoard>> {
    let market = state.market_for(user)?;
    let board = OrderBoard::from_orders(
        visible_to(market.ledger(), user)
            .filter(|order| query.status.is_none_or(|status| order.status == status)),
    );
    drop(market);

    let meta = Meta::count(board.len());
    Ok(ApiResponse::success("Ok", board, Some(meta)))
}

pub fn get_order(
    state: &AppState,
    user: &AuthUser,
    id: OrderId,
) -> AppResult<ApiResponse<OrderDetail>> {
    let market = state.market_for(user)?;
    let order = visible_to(market.ledger(), user)
        .find(|order| order.id == id)
        .map(OrderDetail::from)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("OK", order, Some(Meta::empty())))
}

pub fn checkout(
    state: &AppState,
    user: &AuthUser,
    payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderDetail>> {
    ensure_customer(user)?;
    let mut market = state.market_for(user)?;
    let order = OrderDetail::from(market.checkout(payload.into())?);
    drop(market);

    log_audit(
        Some(&user.name),
        "checkout",
        Some("orders"),
        Some(serde_json::json!({
            "order_id": order.order.id,
            "shop": order.order.shop,
            "total": order.total,
        })),
    );

    Ok(ApiResponse::success(
        format!("Order placed successfully! Order total: {}", order.total_display),
        order,
        Some(Meta::empty()),
    ))
}

/// Shopkeepers mark their own shop's orders ready; delivery accounts mark
/// any ready order delivered.
pub fn update_order_status(
    state: &AppState,
    user: &AuthUser,
    id: OrderId,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<OrderDetail>> {
    let status = payload.status;
    if status.advanced_by() != Some(user.role) {
        tracing::warn!(
            user = %user.name,
            role = %user.role,
            order_id = %id,
            %status,
            "status change not allowed for role"
        );
        return Err(AppError::Forbidden);
    }

    let mut market = state.market_for(user)?;
    if let Some(order) = market.ledger().get(id) {
        if user.role == Role::Shopkeeper && order.shop != user.name {
            tracing::warn!(
                user = %user.name,
                order_id = %id,
                shop = %order.shop,
                "status change on another shop's order"
            );
            return Err(AppError::Forbidden);
        }
    }
    let order = OrderDetail::from(market.update_order_status(id, status)?);
    drop(market);

    log_audit(
        Some(&user.name),
        "order_status",
        Some("orders"),
        Some(serde_json::json!({ "order_id": id, "status": status })),
    );

    let message = match status {
        OrderStatus::Ready => format!("Order #{id} marked as ready for pickup!"),
        OrderStatus::Delivered => {
            format!("Order #{id} marked as delivered successfully!")
        }
        OrderStatus::Pending => format!("Order #{id} status updated to {status}."),
    };
    Ok(ApiResponse::success(message, order, Some(Meta::empty())))
}
