use std::sync::Arc;

use crate::modules::credits::core::credit::Credit;
use crate::modules::credits::core::ports::CreditRepository;
use crate::modules::customers::core::customer::CustomerId;
use crate::shared::core::errors::DomainError;

/// Lists a customer's credits in insertion order. Zero matches is an empty
/// list, never a failure.
pub struct ListCreditsByCustomerHandler {
    credits: Arc<dyn CreditRepository>,
}

impl ListCreditsByCustomerHandler {
    pub fn new(credits: Arc<dyn CreditRepository>) -> Self {
        Self { credits }
    }

    pub async fn handle(&self, customer_id: CustomerId) -> Result<Vec<Credit>, DomainError> {
        let credits = self.credits.find_all_by_customer(customer_id).await?;
        Ok(credits)
    }
}
