use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::customers::core::customer::{Address, CustomerPatch};
use crate::shared::core::errors::DomainError;
use crate::shared::core::validation::RuleSet;

/// Replacement values for the mutable field set. Unlike a field-optional
/// patch, omitting any field is not permitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl UpdateCustomer {
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut rules = RuleSet::new();
        rules.not_empty("firstName", &self.first_name);
        rules.not_empty("lastName", &self.last_name);
        rules.not_empty("zipCode", &self.zip_code);
        rules.not_empty("street", &self.street);
        let violations = rules.finish();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }

    pub fn into_patch(self) -> CustomerPatch {
        CustomerPatch {
            first_name: self.first_name,
            last_name: self.last_name,
            income: self.income,
            address: Address {
                zip_code: self.zip_code,
                street: self.street,
            },
        }
    }
}
