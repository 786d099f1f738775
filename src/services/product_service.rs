use std::cmp::Ordering;

use crate::{
    audit::log_audit,
    dto::products::{CreateProductRequest, ProductList},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_shopkeeper},
    models::{Product, ProductId},
    response::{ApiResponse, Meta},
    routes::params::{ProductQuery, ProductSortBy, SortOrder},
    state::AppState,
};

pub fn list_products(state: &AppState, query: ProductQuery) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let market = state.market()?;

    let term = query.q.as_deref().unwrap_or("");
    let mut matches: Vec<Product> = market
        .catalog()
        .search(term)
        .filter(|product| query.shop.as_deref().is_none_or(|shop| product.shop == shop))
        .cloned()
        .collect();
    drop(market);

    let sort_by = query.sort_by.unwrap_or(ProductSortBy::Id);
    let sort_order = query.sort_order.unwrap_or(SortOrder::Asc);
    matches.sort_by(|a, b| {
        let ord = compare(a, b, sort_by);
        match sort_order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    let total = matches.len() as i64;
    let items = matches
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

fn compare(a: &Product, b: &Product, sort_by: ProductSortBy) -> Ordering {
    match sort_by {
        ProductSortBy::Id => a.id.cmp(&b.id),
        ProductSortBy::Price => a.price.cmp(&b.price).then(a.id.cmp(&b.id)),
        ProductSortBy::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.id.cmp(&b.id)),
    }
}

pub fn get_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<Product>> {
    let market = state.market()?;
    let product = market.catalog().get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product, None))
}

pub fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_shopkeeper(user)?;
    let mut market = state.market_for(user)?;
    let product = market
        .catalog_mut()
        .add_product(&user.name, payload.into())?
        .clone();

    log_audit(
        Some(&user.name),
        "product_create",
        Some("products"),
        Some(serde_json::json!({ "product_id": product.id, "price": product.price })),
    );

    Ok(ApiResponse::success(
        format!("Product \"{}\" added successfully!", product.name),
        product,
        Some(Meta::empty()),
    ))
}
