use utoipa::{OpenApi, openapi::OpenApi as OpenApiDocument};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        cart::{AddToCartRequest, CartView, RemoveFromCartResponse},
        dashboard::{CustomerDashboard, Dashboard, DeliveryDashboard, ShopkeeperDashboard},
        orders::{CheckoutRequest, OrderDetail, UpdateOrderStatusRequest},
        products::{CreateProductRequest, ProductList},
    },
    models::{
        AccountProfile, AccountRef, AccountView, CartItem, Money, Order, OrderId, OrderStatus,
        PaymentMethod, Product, ProductId, Role,
    },
    response::{ApiResponse, Meta},
    routes::{auth, cart, dashboard, health, orders, params, products},
    store::{OrderBoard, SessionUser},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        auth::session,
        products::list_products,
        products::get_product,
        products::create_product,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        orders::list_orders,
        orders::checkout,
        orders::get_order,
        orders::update_order_status,
        dashboard::dashboard
    ),
    components(
        schemas(
            Role,
            AccountProfile,
            AccountView,
            SessionUser,
            Money,
            ProductId,
            OrderId,
            Product,
            CartItem,
            Order,
            AccountRef,
            PaymentMethod,
            OrderStatus,
            OrderBoard,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateProductRequest,
            ProductList,
            AddToCartRequest,
            CartView,
            RemoveFromCartResponse,
            CheckoutRequest,
            UpdateOrderStatusRequest,
            OrderDetail,
            ShopkeeperDashboard,
            CustomerDashboard,
            DeliveryDashboard,
            Dashboard,
            params::Pagination,
            params::ProductSortBy,
            params::SortOrder,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<OrderDetail>,
            ApiResponse<OrderBoard>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration, login and session"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Cart", description = "Customer cart endpoints"),
        (name = "Orders", description = "Checkout and order lifecycle"),
        (name = "Dashboard", description = "Role landing views"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiDocument> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
