use crate::models::{Account, Role};

use super::error::{StoreError, StoreResult, require};

/// Three disjoint registries, one per role.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    shopkeepers: Vec<Account>,
    customers: Vec<Account>,
    delivery: Vec<Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self, role: Role) -> &[Account] {
        match role {
            Role::Shopkeeper => &self.shopkeepers,
            Role::Customer => &self.customers,
            Role::Delivery => &self.delivery,
        }
    }

    fn registry_mut(&mut self, role: Role) -> &mut Vec<Account> {
        match role {
            Role::Shopkeeper => &mut self.shopkeepers,
            Role::Customer => &mut self.customers,
            Role::Delivery => &mut self.delivery,
        }
    }

    pub fn register(&mut self, account: Account) -> StoreResult<&Account> {
        require("email", &account.email)?;
        require("password", &account.password)?;
        require("name", &account.name)?;
        let role = account.role();
        let detail_field = match role {
            Role::Shopkeeper => "address",
            Role::Customer => "phone",
            Role::Delivery => "vehicle",
        };
        require(detail_field, account.profile.detail())?;

        let registry = self.registry_mut(role);
        if registry.iter().any(|existing| existing.email == account.email) {
            return Err(StoreError::DuplicateEmail {
                role,
                email: account.email,
            });
        }
        // A shopkeeper's name is the shop key on products and orders.
        if role == Role::Shopkeeper
            && registry
                .iter()
                .any(|existing| same_shop_name(&existing.name, &account.name))
        {
            return Err(StoreError::DuplicateShopName(account.name));
        }
        registry.push(account);
        let index = registry.len() - 1;
        Ok(&registry[index])
    }

    /// First record in the role's registry with exactly this email and password.
    pub fn authenticate(&self, role: Role, email: &str, password: &str) -> Option<&Account> {
        self.registry(role)
            .iter()
            .find(|account| account.email == email && account.password == password)
    }

    pub fn len(&self) -> usize {
        Role::ALL.iter().map(|role| self.registry(*role).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn same_shop_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
