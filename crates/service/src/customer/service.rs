use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::domain::{Customer, CustomerRecord};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;

/// Application service for customers; every call goes straight to the repository.
#[derive(Clone)]
pub struct CustomerService {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self { Self { repo } }

    pub async fn list_all(&self, id: Option<i64>) -> Result<Vec<Customer>, ServiceError> {
        let rows = self.repo.find_all(id).await?;
        debug!(count = rows.len(), filter = ?id, "customers listed");
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> { self.repo.find_by_id(id).await }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Customer>, ServiceError> { self.repo.find_by_email(email).await }

    /// Create a customer from name and email; the store assigns the id.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{repository::memory::InMemoryCustomerRepository, CustomerService};
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerRepository::default()));
    /// let c = tokio_test::block_on(svc.create("Ana", "ana@x.com")).unwrap();
    /// assert_eq!(c.id, 1);
    /// assert_eq!(c.email, "ana@x.com");
    /// ```
    #[instrument(skip(self, name, email))]
    pub async fn create(&self, name: &str, email: &str) -> Result<Customer, ServiceError> {
        let created = self.repo.save(CustomerRecord::new(name, email)).await?;
        info!(id = created.id, "customer_created");
        Ok(created)
    }

    /// Persist the full state of an existing customer.
    #[instrument(skip(self, customer), fields(id = customer.id))]
    pub async fn save(&self, customer: Customer) -> Result<Customer, ServiceError> {
        let saved = self.repo.save(customer.into()).await?;
        info!(id = saved.id, "customer_saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found("customer"));
        }
        info!(id, "customer_deleted");
        Ok(())
    }
}
