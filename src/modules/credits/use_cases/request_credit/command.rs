use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::customers::core::customer::CustomerId;
use crate::shared::core::errors::DomainError;
use crate::shared::core::validation::RuleSet;

pub const MIN_INSTALLMENTS: u32 = 1;
pub const MAX_INSTALLMENTS: u32 = 48;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCredit {
    pub credit_value: Decimal,
    pub first_installment_date: NaiveDate,
    pub number_of_installments: u32,
    pub customer_id: CustomerId,
}

impl RequestCredit {
    /// Structural preconditions checked before the handler runs; the handler
    /// trusts a validated command. `today` is the validation-time date so the
    /// future-date rule stays deterministic under test.
    pub fn validate(&self, today: NaiveDate) -> Result<(), DomainError> {
        let mut rules = RuleSet::new();
        rules.positive("creditValue", self.credit_value);
        rules.future_date("firstInstallmentDate", self.first_installment_date, today);
        rules.within(
            "numberOfInstallments",
            self.number_of_installments,
            MIN_INSTALLMENTS,
            MAX_INSTALLMENTS,
        );
        let violations = rules.finish();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }
}
