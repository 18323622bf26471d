use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type CustomerId = i64;

/// Embedded value owned by the customer; no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

/// `id` is `None` until the store has assigned one. cpf, email and password
/// never change after registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub address: Address,
}

/// Replacement values for the fixed mutable field set. Every field is
/// required; there is no partial patch.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPatch {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub address: Address,
}

impl Customer {
    /// Full-replace merge: overwrites the mutable fields together and keeps
    /// id, cpf, email and password from the existing record.
    pub fn merged(self, patch: CustomerPatch) -> Customer {
        Customer {
            first_name: patch.first_name,
            last_name: patch.last_name,
            income: patch.income,
            address: patch.address,
            ..self
        }
    }
}
