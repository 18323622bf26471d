use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::customers::core::customer::{Address, Customer};
use crate::shared::core::errors::DomainError;
use crate::shared::core::validation::RuleSet;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCustomer {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

impl RegisterCustomer {
    /// Field rules for registration. All violations are reported together.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut rules = RuleSet::new();
        rules.not_empty("firstName", &self.first_name);
        rules.not_empty("lastName", &self.last_name);
        rules.cpf("cpf", &self.cpf);
        rules.email("email", &self.email);
        rules.not_empty("password", &self.password);
        rules.not_empty("zipCode", &self.zip_code);
        rules.not_empty("street", &self.street);
        let violations = rules.finish();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations))
        }
    }

    pub fn into_customer(self) -> Customer {
        Customer {
            id: None,
            first_name: self.first_name,
            last_name: self.last_name,
            cpf: self.cpf,
            income: self.income,
            email: self.email,
            password: self.password,
            address: Address {
                zip_code: self.zip_code,
                street: self.street,
            },
        }
    }
}
