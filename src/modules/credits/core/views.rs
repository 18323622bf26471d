use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::credits::core::credit::{Credit, CreditStatus};
use crate::modules::customers::core::customer::Customer;

/// Single-credit shape: the credit plus a slice of its owner's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installments: u32,
    pub status: CreditStatus,
    pub email_customer: String,
    pub income_customer: Decimal,
}

impl CreditView {
    pub fn new(credit: &Credit, owner: &Customer) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
            status: credit.status,
            email_customer: owner.email.clone(),
            income_customer: owner.income,
        }
    }
}

/// List shape: just enough to pick a credit out of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSummaryView {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub number_of_installments: u32,
}

impl From<&Credit> for CreditSummaryView {
    fn from(credit: &Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}
