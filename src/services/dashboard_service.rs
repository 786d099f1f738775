use crate::{
    dto::{
        cart::CartView,
        dashboard::{CustomerDashboard, Dashboard, DeliveryDashboard, ShopkeeperDashboard},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Role,
    response::{ApiResponse, Meta},
    services::order_service::board_for,
    state::AppState,
};

/// Everything the session's role sees on its landing screen.
pub fn dashboard(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Dashboard>> {
    let market = state.market_for(user)?;
    let session_user = market.current_user().cloned().ok_or(AppError::Unauthorized)?;
    let orders = board_for(market.ledger(), user);

    let dashboard = match user.role {
        Role::Shopkeeper => Dashboard::Shopkeeper(ShopkeeperDashboard {
            user: session_user,
            products: market.catalog().list_for_shop(&user.name).cloned().collect(),
            pending_orders: market.ledger().pending_count_for_shop(&user.name),
            orders,
        }),
        Role::Customer => Dashboard::Customer(CustomerDashboard {
            user: session_user,
            products: market.catalog().list_all().cloned().collect(),
            cart: CartView::from(market.cart()?),
            orders,
        }),
        Role::Delivery => Dashboard::Delivery(DeliveryDashboard {
            user: session_user,
            orders,
            deliveries: market.ledger().delivered_by(&user.email).cloned().collect(),
        }),
    };

    Ok(ApiResponse::success(
        format!("{} dashboard", user.role),
        dashboard,
        Some(Meta::empty()),
    ))
}
