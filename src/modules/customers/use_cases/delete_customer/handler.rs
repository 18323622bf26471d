use std::sync::Arc;

use crate::modules::credits::core::ports::CreditRepository;
use crate::modules::customers::core::customer::CustomerId;
use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::customers::use_cases::find_customer_by_id::handler::FindCustomerByIdHandler;
use crate::shared::core::errors::DomainError;

/// Removes a customer. Deletion is refused while the customer still owns
/// credits, so no credit is ever left referencing a missing owner.
pub struct DeleteCustomerHandler {
    customers: Arc<dyn CustomerRepository>,
    credits: Arc<dyn CreditRepository>,
    find_customer: FindCustomerByIdHandler,
}

impl DeleteCustomerHandler {
    pub fn new(customers: Arc<dyn CustomerRepository>, credits: Arc<dyn CreditRepository>) -> Self {
        Self {
            find_customer: FindCustomerByIdHandler::new(customers.clone()),
            customers,
            credits,
        }
    }

    pub async fn handle(&self, id: CustomerId) -> Result<(), DomainError> {
        self.find_customer.handle(id).await?;
        if self.credits.exists_for_customer(id).await? {
            return Err(DomainError::Conflict(format!(
                "Customer {id} still owns credits"
            )));
        }
        self.customers.delete(id).await?;
        Ok(())
    }
}
