use async_trait::async_trait;

use crate::modules::customers::core::customer::{Customer, CustomerId};
use crate::shared::core::ports::RepositoryError;

/// Persistence collaborator for customers. `save` assigns the identifier when
/// absent and enforces cpf/email uniqueness through the store's own
/// constraints, reporting a typed violation.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn save(&self, customer: Customer) -> Result<Customer, RepositoryError>;
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;
    async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError>;
}
