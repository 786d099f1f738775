use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartView, RemoveFromCartResponse},
    error::AppResult,
    middleware::auth::{AuthUser, ensure_customer},
    models::ProductId,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn get_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartView>> {
    ensure_customer(user)?;
    let market = state.market_for(user)?;
    let cart = CartView::from(market.cart()?);
    let meta = Meta::count(cart.items.len());
    Ok(ApiResponse::success("OK", cart, Some(meta)))
}

pub fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartView>> {
    ensure_customer(user)?;
    let mut market = state.market_for(user)?;
    let (name, quantity) = {
        let item = market.add_to_cart(payload.product_id)?;
        (item.name.clone(), item.quantity)
    };
    let cart = CartView::from(market.cart()?);
    drop(market);

    log_audit(
        Some(&user.name),
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "product_id": payload.product_id, "quantity": quantity })),
    );

    Ok(ApiResponse::success(
        format!("{name} added to cart!"),
        cart,
        None,
    ))
}

/// Removing a product that is not in the cart is a no-op.
pub fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    product_id: ProductId,
) -> AppResult<ApiResponse<RemoveFromCartResponse>> {
    ensure_customer(user)?;
    let mut market = state.market_for(user)?;
    let removed = market.remove_from_cart(product_id)?;
    let cart = CartView::from(market.cart()?);
    drop(market);

    if removed {
        log_audit(
            Some(&user.name),
            "cart_remove",
            Some("cart"),
            Some(serde_json::json!({ "product_id": product_id })),
        );
    }

    let message = if removed {
        "Removed from cart"
    } else {
        "Not in cart"
    };
    Ok(ApiResponse::success(
        message,
        RemoveFromCartResponse { removed, cart },
        Some(Meta::empty()),
    ))
}
