use std::sync::Arc;

use crate::modules::customers::core::customer::{Customer, CustomerId};
use crate::modules::customers::core::ports::CustomerRepository;
use crate::shared::core::errors::DomainError;

/// Lookup shared by every operation that resolves a customer first; its
/// `NotFound` propagates unchanged through those operations.
pub struct FindCustomerByIdHandler {
    customers: Arc<dyn CustomerRepository>,
}

impl FindCustomerByIdHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub async fn handle(&self, id: CustomerId) -> Result<Customer, DomainError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Id {id} not found")))
    }
}
