// In memory implementation of the CustomerRepository port.
//
// Purpose
// - Support use case tests and local development without a database.
//
// Responsibilities
// - Assign sequential identifiers on first save.
// - Enforce cpf/email uniqueness through index maps, the way a relational
//   store would through unique constraints.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::customers::core::customer::{Customer, CustomerId};
use crate::modules::customers::core::ports::CustomerRepository;
use crate::shared::core::ports::RepositoryError;

#[derive(Default)]
struct Store {
    rows: HashMap<CustomerId, Customer>,
    cpf_index: HashMap<String, CustomerId>,
    email_index: HashMap<String, CustomerId>,
    next_id: CustomerId,
}

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    inner: RwLock<Store>,
    offline: bool,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn guard(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("customer store offline".into()));
        }
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, mut customer: Customer) -> Result<Customer, RepositoryError> {
        self.guard()?;
        let mut store = self.inner.write().await;
        if let Some(owner) = store.cpf_index.get(&customer.cpf) {
            if customer.id != Some(*owner) {
                return Err(RepositoryError::UniqueViolation { field: "cpf" });
            }
        }
        if let Some(owner) = store.email_index.get(&customer.email) {
            if customer.id != Some(*owner) {
                return Err(RepositoryError::UniqueViolation { field: "email" });
            }
        }
        let id = match customer.id {
            Some(id) => id,
            None => {
                store.next_id += 1;
                store.next_id
            }
        };
        customer.id = Some(id);
        store.cpf_index.insert(customer.cpf.clone(), id);
        store.email_index.insert(customer.email.clone(), id);
        store.rows.insert(id, customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        self.guard()?;
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn delete(&self, id: CustomerId) -> Result<(), RepositoryError> {
        self.guard()?;
        let mut store = self.inner.write().await;
        if let Some(removed) = store.rows.remove(&id) {
            store.cpf_index.remove(&removed.cpf);
            store.email_index.remove(&removed.email);
        }
        Ok(())
    }
}
