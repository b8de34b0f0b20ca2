use serde::{Deserialize, Serialize};

/// Stored customer as exchanged with callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<models::customer::Model> for Customer {
    fn from(m: models::customer::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email }
    }
}

/// State handed to `CustomerRepository::save`.
/// Without an id the store inserts a new row and assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl CustomerRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), email: email.into() }
    }
}

impl From<Customer> for CustomerRecord {
    fn from(c: Customer) -> Self {
        Self { id: Some(c.id), name: c.name, email: c.email }
    }
}
