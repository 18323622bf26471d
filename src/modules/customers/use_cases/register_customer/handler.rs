use std::sync::Arc;

use crate::modules::customers::core::customer::Customer;
use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::customers::use_cases::register_customer::command::RegisterCustomer;
use crate::shared::core::errors::DomainError;

/// Persists a validated registration. A uniqueness violation from the store
/// surfaces as `Conflict`; nothing is written in that case.
pub struct RegisterCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl RegisterCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub async fn handle(&self, command: RegisterCustomer) -> Result<Customer, DomainError> {
        let stored = self.customers.save(command.into_customer()).await?;
        Ok(stored)
    }
}
