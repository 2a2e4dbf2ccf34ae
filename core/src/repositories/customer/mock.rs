//! In-memory implementation of CustomerRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::customer::{Customer, PendingRegistration};
use crate::errors::DomainError;

use super::trait_::CustomerRepository;

/// In-memory customer repository.
///
/// The upsert and conditional-verify paths each hold the write lock for the
/// whole read-modify-write, mirroring the atomicity the MySQL implementation
/// gets from single statements.
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<Uuid, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            customers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record directly, bypassing the upsert path. Test seam for
    /// constructing states the public flow cannot reach (e.g. expired OTPs).
    pub async fn insert_raw(&self, customer: Customer) {
        self.customers.write().await.insert(customer.id, customer);
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers.get(&id).cloned())
    }

    async fn find_by_tenant_and_email(
        &self,
        tenant_id: Uuid,
        email: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .find(|c| c.tenant_id == tenant_id && c.email == email)
            .cloned())
    }

    async fn find_unverified_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, DomainError> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .find(|c| c.email == email && !c.is_verified)
            .cloned())
    }

    async fn upsert_pending(
        &self,
        pending: &PendingRegistration,
    ) -> Result<Customer, DomainError> {
        let mut customers = self.customers.write().await;

        let existing = customers
            .values_mut()
            .find(|c| c.tenant_id == pending.tenant_id && c.email == pending.email);

        let customer = match existing {
            Some(record) => {
                record.rearm(pending);
                record.clone()
            }
            None => {
                let record = Customer::new_pending(pending);
                customers.insert(record.id, record.clone());
                record
            }
        };

        Ok(customer)
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut customers = self.customers.write().await;

        match customers.get_mut(&id) {
            Some(customer) if !customer.is_verified => {
                customer.mark_verified();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
