use std::sync::Arc;

use crate::modules::customers::core::customer::{Customer, CustomerId, CustomerPatch};
use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::customers::use_cases::find_customer_by_id::handler::FindCustomerByIdHandler;
use crate::shared::core::errors::DomainError;

/// Resolves the existing customer, merges the fixed mutable field set and
/// persists the result. Identity fields are untouched.
pub struct UpdateCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    find_customer: FindCustomerByIdHandler,
}

impl UpdateCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self {
            find_customer: FindCustomerByIdHandler::new(customers.clone()),
            customers,
        }
    }

    pub async fn handle(
        &self,
        id: CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, DomainError> {
        let existing = self.find_customer.handle(id).await?;
        let merged = existing.merged(patch);
        let stored = self.customers.save(merged).await?;
        Ok(stored)
    }
}
