use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::credits::core::credit::Credit;
use crate::modules::customers::core::customer::CustomerId;
use crate::shared::core::ports::RepositoryError;

/// Persistence collaborator for credits. `save` enforces credit-code
/// uniqueness; `find_all_by_customer` preserves insertion order.
#[async_trait]
pub trait CreditRepository: Send + Sync {
    async fn save(&self, credit: Credit) -> Result<Credit, RepositoryError>;
    async fn find_all_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Credit>, RepositoryError>;
    async fn find_by_code(&self, code: Uuid) -> Result<Option<Credit>, RepositoryError>;
    async fn exists_for_customer(&self, customer_id: CustomerId) -> Result<bool, RepositoryError>;
}
