use sea_orm::DatabaseConnection;

use crate::customer::domain::{Customer, CustomerRecord};
use crate::customer::repository::CustomerRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self, id: Option<i64>) -> Result<Vec<Customer>, ServiceError> {
        let rows = models::customer::list(&self.db, id).await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, ServiceError> {
        Ok(models::customer::find_by_id(&self.db, id).await?.map(Customer::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, ServiceError> {
        Ok(models::customer::find_by_email(&self.db, email).await?.map(Customer::from))
    }

    async fn save(&self, record: CustomerRecord) -> Result<Customer, ServiceError> {
        let saved = match record.id {
            Some(id) => models::customer::update(&self.db, id, &record.name, &record.email).await?,
            None => models::customer::create(&self.db, &record.name, &record.email).await?,
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::customer::hard_delete(&self.db, id).await?)
    }
}
