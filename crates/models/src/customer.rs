use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Null check shared by insert and update: both fields must carry text.
pub fn validate_fields(name: &str, email: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name must not be empty".into()));
    }
    if email.trim().is_empty() {
        return Err(errors::ModelError::Validation("email must not be empty".into()));
    }
    Ok(())
}

pub async fn list(db: &DatabaseConnection, id: Option<i64>) -> Result<Vec<Model>, errors::ModelError> {
    let mut finder = Entity::find();
    if let Some(id) = id { finder = finder.filter(Column::Id.eq(id)); }
    finder
        .order_by_asc(Column::Id)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Email carries no unique index; the lowest id wins when several rows share it.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .order_by_asc(Column::Id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn create(db: &DatabaseConnection, name: &str, email: &str) -> Result<Model, errors::ModelError> {
    validate_fields(name, email)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite name and email of an existing row; the id never changes.
pub async fn update(db: &DatabaseConnection, id: i64, name: &str, email: &str) -> Result<Model, errors::ModelError> {
    validate_fields(name, email)?;
    let mut found: ActiveModel = find_by_id(db, id)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound(format!("customer {id}")))?
        .into();
    found.name = Set(name.to_string());
    found.email = Set(email.to_string());
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Returns true when a row was removed.
pub async fn hard_delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
