// In memory implementation of the CreditRepository port.
//
// Responsibilities
// - Keep credits in insertion order, as the listing contract requires.
// - Enforce credit-code uniqueness the way a unique column would.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::credits::core::credit::Credit;
use crate::modules::credits::core::ports::CreditRepository;
use crate::modules::customers::core::customer::CustomerId;
use crate::shared::core::ports::RepositoryError;

#[derive(Default)]
struct Store {
    rows: Vec<Credit>,
    codes: HashSet<Uuid>,
}

#[derive(Default)]
pub struct InMemoryCreditRepository {
    inner: RwLock<Store>,
    offline: bool,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn guard(&self) -> Result<(), RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Backend("credit store offline".into()));
        }
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn save(&self, credit: Credit) -> Result<Credit, RepositoryError> {
        self.guard()?;
        let mut store = self.inner.write().await;
        if !store.codes.insert(credit.credit_code) {
            return Err(RepositoryError::UniqueViolation {
                field: "credit_code",
            });
        }
        store.rows.push(credit.clone());
        Ok(credit)
    }

    async fn find_all_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Credit>, RepositoryError> {
        self.guard()?;
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .filter(|credit| credit.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_code(&self, code: Uuid) -> Result<Option<Credit>, RepositoryError> {
        self.guard()?;
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .find(|credit| credit.credit_code == code)
            .cloned())
    }

    async fn exists_for_customer(&self, customer_id: CustomerId) -> Result<bool, RepositoryError> {
        self.guard()?;
        Ok(self
            .inner
            .read()
            .await
            .rows
            .iter()
            .any(|credit| credit.customer_id == customer_id))
    }
}
