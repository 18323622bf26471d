use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::customers::core::customer::{Customer, CustomerId};

/// Customer shape returned by the transport boundary. Password never leaves
/// the core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: Option<CustomerId>,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub zip_code: String,
    pub street: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            cpf: customer.cpf.clone(),
            income: customer.income,
            email: customer.email.clone(),
            zip_code: customer.address.zip_code.clone(),
            street: customer.address.street.clone(),
        }
    }
}
