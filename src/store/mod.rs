//! In-memory marketplace core: accounts, catalog, cart, order ledger and the
//! single active session. Synchronous and free of any HTTP concern.

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod ledger;
pub mod session;

use chrono::{Duration, Utc};

use crate::models::{Account, AccountRef, CartItem, Order, OrderId, OrderStatus, ProductId, Role};

pub use accounts::AccountDirectory;
pub use cart::Cart;
pub use catalog::{Catalog, NewProduct};
pub use error::{StoreError, StoreResult};
pub use ledger::{DeliveryDetails, OrderBoard, OrderLedger};
pub use session::{Session, SessionUser};

#[derive(Debug, Clone, Copy)]
pub struct MarketplaceSettings {
    /// Earliest accepted delivery time, measured from checkout. Zero disables.
    pub min_delivery_lead: Duration,
}

impl Default for MarketplaceSettings {
    fn default() -> Self {
        Self {
            min_delivery_lead: Duration::minutes(60),
        }
    }
}

/// Application state owned by one process: one store, one session.
#[derive(Debug, Default)]
pub struct Marketplace {
    accounts: AccountDirectory,
    catalog: Catalog,
    ledger: OrderLedger,
    session: Option<Session>,
    settings: MarketplaceSettings,
}

impl Marketplace {
    pub fn new(settings: MarketplaceSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &MarketplaceSettings {
        &self.settings
    }

    pub fn accounts(&self) -> &AccountDirectory {
        &self.accounts
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(Session::user)
    }

    fn session_mut(&mut self) -> StoreResult<&mut Session> {
        self.session.as_mut().ok_or(StoreError::NotLoggedIn)
    }

    pub fn register(&mut self, account: Account) -> StoreResult<&Account> {
        self.accounts.register(account)
    }

    /// Authenticates against the role's registry and replaces the session on
    /// success. A failed attempt leaves the current session untouched.
    pub fn login(&mut self, role: Role, email: &str, password: &str) -> StoreResult<&SessionUser> {
        let account = self
            .accounts
            .authenticate(role, email, password)
            .ok_or(StoreError::InvalidCredentials)?;
        let session = self.session.insert(Session::start(account));
        Ok(session.user())
    }

    /// Ends the session and discards its cart.
    pub fn logout(&mut self) -> Option<SessionUser> {
        self.session.take().map(|session| session.user().clone())
    }

    pub fn cart(&self) -> StoreResult<&Cart> {
        self.session
            .as_ref()
            .map(Session::cart)
            .ok_or(StoreError::NotLoggedIn)
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> StoreResult<&CartItem> {
        let session = self.session.as_mut().ok_or(StoreError::NotLoggedIn)?;
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StoreError::ProductNotFound(product_id))?;
        Ok(session.cart_mut().add(product))
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> StoreResult<bool> {
        Ok(self.session_mut()?.cart_mut().remove(product_id))
    }

    /// Places the session cart as an order for the session user, then empties
    /// the cart. A rejected checkout leaves the cart as it was.
    pub fn checkout(&mut self, details: DeliveryDetails) -> StoreResult<&Order> {
        let session = self.session.as_mut().ok_or(StoreError::NotLoggedIn)?;
        let customer = AccountRef::from(session.user());
        let order = self.ledger.place_order(
            session.cart(),
            details,
            &customer,
            self.settings.min_delivery_lead,
            Utc::now(),
        )?;
        session.cart_mut().clear();
        Ok(order)
    }

    /// Advances an order on behalf of the session user.
    pub fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> StoreResult<&Order> {
        let actor = self
            .current_user()
            .map(AccountRef::from)
            .ok_or(StoreError::NotLoggedIn)?;
        self.ledger.update_status(id, status, &actor)
    }
}
