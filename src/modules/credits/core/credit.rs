use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::customers::core::customer::CustomerId;

/// Lifecycle states of a credit. Only `InProgress` is ever assigned here;
/// approval and rejection happen downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    InProgress,
    Approved,
    Rejected,
}

/// An installment credit. Immutable once stored; the code is generated at
/// creation and is the only public handle to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credit {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub first_installment_date: NaiveDate,
    pub number_of_installments: u32,
    pub status: CreditStatus,
    pub customer_id: CustomerId,
}
