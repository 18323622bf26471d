use std::sync::Arc;

use uuid::Uuid;

use crate::modules::credits::core::credit::{Credit, CreditStatus};
use crate::modules::credits::core::ports::CreditRepository;
use crate::modules::credits::use_cases::request_credit::command::RequestCredit;
use crate::modules::customers::core::ports::CustomerRepository;
use crate::modules::customers::use_cases::find_customer_by_id::handler::FindCustomerByIdHandler;
use crate::shared::core::errors::DomainError;

/// Originates a credit for an existing customer. The owner is resolved
/// through the customer lookup; its `NotFound` propagates unchanged, so an
/// unknown owner fails exactly like a direct customer lookup would.
pub struct RequestCreditHandler {
    credits: Arc<dyn CreditRepository>,
    find_customer: FindCustomerByIdHandler,
}

impl RequestCreditHandler {
    pub fn new(credits: Arc<dyn CreditRepository>, customers: Arc<dyn CustomerRepository>) -> Self {
        Self {
            credits,
            find_customer: FindCustomerByIdHandler::new(customers),
        }
    }

    pub async fn handle(&self, command: RequestCredit) -> Result<Credit, DomainError> {
        self.find_customer.handle(command.customer_id).await?;
        let credit = Credit {
            credit_code: Uuid::now_v7(),
            credit_value: command.credit_value,
            first_installment_date: command.first_installment_date,
            number_of_installments: command.number_of_installments,
            status: CreditStatus::InProgress,
            customer_id: command.customer_id,
        };
        let stored = self.credits.save(credit).await?;
        Ok(stored)
    }
}
