use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::{Account, AccountProfile, Role},
    store::SessionUser,
};

/// Registration form. Exactly one of `address`, `phone` or `vehicle` is read,
/// depending on the role in the path.
#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub vehicle: Option<String>,
}

impl RegisterRequest {
    pub fn into_account(self, role: Role) -> Result<Account, AppError> {
        let missing =
            |field: &str| AppError::BadRequest(format!("{field} is required for {role}"));
        let profile = match role {
            Role::Shopkeeper => AccountProfile::Shopkeeper {
                address: self.address.ok_or_else(|| missing("address"))?,
            },
            Role::Customer => AccountProfile::Customer {
                phone: self.phone.ok_or_else(|| missing("phone"))?,
            },
            Role::Delivery => AccountProfile::Delivery {
                vehicle: self.vehicle.ok_or_else(|| missing("vehicle"))?,
            },
        };
        Ok(Account {
            email: self.email,
            password: self.password,
            name: self.name,
            profile,
        })
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: SessionUser,
}
