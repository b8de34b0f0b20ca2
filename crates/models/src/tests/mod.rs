
/// CRUD operations on the customer table
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Connect and bootstrap the schema, or `None` when no database is configured.
pub(crate) async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL missing or SKIP_DB_TESTS set");
        return Ok(None);
    }
    let db = crate::db::connect().await?;
    crate::db::ensure_schema(&db).await?;
    Ok(Some(db))
}

#[test]
fn validate_fields_rejects_blank_values() {
    use crate::{customer::validate_fields, errors::ModelError};

    assert!(validate_fields("Ana", "ana@x.com").is_ok());
    assert!(matches!(validate_fields("  ", "ana@x.com"), Err(ModelError::Validation(_))));
    assert!(matches!(validate_fields("Ana", ""), Err(ModelError::Validation(_))));
}

#[test]
fn model_serializes_as_flat_triple() {
    let m = crate::customer::Model { id: 7, name: "Ana".into(), email: "ana@x.com".into() };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v, serde_json::json!({"id": 7, "name": "Ana", "email": "ana@x.com"}));
}
