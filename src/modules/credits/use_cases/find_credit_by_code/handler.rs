use std::sync::Arc;

use uuid::Uuid;

use crate::modules::credits::core::credit::Credit;
use crate::modules::credits::core::ports::CreditRepository;
use crate::modules::customers::core::customer::CustomerId;
use crate::shared::core::errors::DomainError;

/// Looks up a credit by code and enforces ownership. An absent code and a
/// wrong owner are distinct kinds internally; the transport boundary renders
/// them identically so a non-owner learns nothing about the code.
pub struct FindCreditByCodeHandler {
    credits: Arc<dyn CreditRepository>,
}

impl FindCreditByCodeHandler {
    pub fn new(credits: Arc<dyn CreditRepository>) -> Self {
        Self { credits }
    }

    pub async fn handle(
        &self,
        code: Uuid,
        customer_id: CustomerId,
    ) -> Result<Credit, DomainError> {
        let credit = self
            .credits
            .find_by_code(code)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("CreditCode {code} not found")))?;
        if credit.customer_id != customer_id {
            return Err(DomainError::OwnershipMismatch(format!(
                "Credit {code} does not belong to customer {customer_id}"
            )));
        }
        Ok(credit)
    }
}
