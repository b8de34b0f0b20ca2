use crate::customer;
use crate::errors::ModelError;
use anyhow::Result;
use uuid::Uuid;

use super::setup_test_db;

fn unique_email(tag: &str) -> String {
    format!("{tag}_{}@example.com", Uuid::new_v4())
}

/// Test customer CRUD operations
#[tokio::test]
async fn test_customer_crud() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };

    // Create
    let email = unique_email("crud");
    let created = customer::create(&db, "Ana", &email).await?;
    assert_eq!(created.name, "Ana");
    assert_eq!(created.email, email);
    assert!(created.id > 0);

    // Read
    let found = customer::find_by_id(&db, created.id).await?.expect("row exists");
    assert_eq!(found, created);
    let by_email = customer::find_by_email(&db, &email).await?.expect("row exists");
    assert_eq!(by_email.id, created.id);

    // Filtered list returns just this row
    let listed = customer::list(&db, Some(created.id)).await?;
    assert_eq!(listed, vec![created.clone()]);

    // Update keeps the id
    let updated = customer::update(&db, created.id, "Ana B", &email).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ana B");

    // Delete
    assert!(customer::hard_delete(&db, created.id).await?);
    assert!(customer::find_by_id(&db, created.id).await?.is_none());
    assert!(!customer::hard_delete(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let err = customer::update(&db, i64::MAX, "Nobody", "nobody@example.com").await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_resolves_to_lowest_id() -> Result<()> {
    let Some(db) = setup_test_db().await? else { return Ok(()) };
    let email = unique_email("dup");
    let first = customer::create(&db, "First", &email).await?;
    let second = customer::create(&db, "Second", &email).await?;

    let found = customer::find_by_email(&db, &email).await?.expect("row exists");
    assert_eq!(found.id, first.id);

    customer::hard_delete(&db, first.id).await?;
    customer::hard_delete(&db, second.id).await?;
    Ok(())
}
