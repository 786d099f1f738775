use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Account, AccountRef, Role};

use super::cart::Cart;

/// Who is logged in. Cheap to clone out of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SessionUser {
    pub session_id: Uuid,
    pub role: Role,
    pub name: String,
    pub email: String,
}

impl From<&SessionUser> for AccountRef {
    fn from(user: &SessionUser) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// The single active session and the customer's cart.
#[derive(Debug)]
pub struct Session {
    user: SessionUser,
    cart: Cart,
}

impl Session {
    pub fn start(account: &Account) -> Self {
        Self {
            user: SessionUser {
                session_id: Uuid::new_v4(),
                role: account.role(),
                name: account.name.clone(),
                email: account.email.clone(),
            },
            cart: Cart::new(),
        }
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}
