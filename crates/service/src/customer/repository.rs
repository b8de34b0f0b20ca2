use async_trait::async_trait;

use super::domain::{Customer, CustomerRecord};
use crate::errors::ServiceError;

/// Persistence collaborator for customer records.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers ordered by id; `id` narrows the query to that single key.
    async fn find_all(&self, id: Option<i64>) -> Result<Vec<Customer>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, ServiceError>;
    /// Insert when `record.id` is `None`, otherwise overwrite the existing row.
    /// Blank name or email is a `Validation` error and nothing is written.
    async fn save(&self, record: CustomerRecord) -> Result<Customer, ServiceError>;
    /// Returns true if a row was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// In-memory repository for tests and database-less local runs.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct Inner {
        next_id: i64,
        rows: BTreeMap<i64, Customer>,
    }

    pub struct InMemoryCustomerRepository {
        inner: Mutex<Inner>,
    }

    impl Default for InMemoryCustomerRepository {
        fn default() -> Self {
            Self { inner: Mutex::new(Inner { next_id: 1, rows: BTreeMap::new() }) }
        }
    }

    impl InMemoryCustomerRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, ServiceError> {
            self.inner.lock().map_err(|_| ServiceError::Db("in-memory store poisoned".into()))
        }
    }

    #[async_trait]
    impl CustomerRepository for InMemoryCustomerRepository {
        async fn find_all(&self, id: Option<i64>) -> Result<Vec<Customer>, ServiceError> {
            let inner = self.lock()?;
            Ok(match id {
                Some(id) => inner.rows.get(&id).cloned().into_iter().collect(),
                None => inner.rows.values().cloned().collect(),
            })
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, ServiceError> {
            Ok(self.lock()?.rows.values().find(|c| c.email == email).cloned())
        }

        async fn save(&self, record: CustomerRecord) -> Result<Customer, ServiceError> {
            models::customer::validate_fields(&record.name, &record.email)?;
            let mut inner = self.lock()?;
            let id = match record.id {
                Some(id) if inner.rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::NotFound(format!("customer {id}"))),
                None => {
                    let id = inner.next_id;
                    inner.next_id += 1;
                    id
                }
            };
            let customer = Customer { id, name: record.name, email: record.email };
            inner.rows.insert(id, customer.clone());
            Ok(customer)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.remove(&id).is_some())
        }
    }
}
