use anyhow::Result;
use staffdir_tests::memory_pool;

#[tokio::test]
async fn create_assigns_fresh_ids_and_lists_exactly_once() -> Result<()> {
    let pool = memory_pool().await?;

    let john = platform_db::create_employee(&pool, "John Doe", "HR").await?;
    let jane = platform_db::create_employee(&pool, "Jane Doe", "IT").await?;
    assert_ne!(john.id, jane.id);

    let listed = platform_db::list_employees(&pool).await?;
    assert_eq!(listed.len(), 2);
    let johns: Vec<_> = listed.iter().filter(|e| e.name == "John Doe").collect();
    assert_eq!(johns.len(), 1);
    assert_eq!(johns[0].department, "HR");
    assert_eq!(johns[0].id, john.id);
    Ok(())
}

#[tokio::test]
async fn find_returns_persisted_values() -> Result<()> {
    let pool = memory_pool().await?;
    let created = platform_db::create_employee(&pool, "Ada", "Engineering").await?;

    let found = platform_db::find_employee(&pool, created.id)
        .await?
        .expect("created employee should be findable");
    assert_eq!(found, created);

    assert!(platform_db::find_employee(&pool, created.id + 1).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn delete_removes_the_row_permanently() -> Result<()> {
    let pool = memory_pool().await?;
    let john = platform_db::create_employee(&pool, "John Doe", "HR").await?;
    let jane = platform_db::create_employee(&pool, "Jane Doe", "IT").await?;

    assert!(platform_db::delete_employee(&pool, john.id).await?);
    assert!(platform_db::find_employee(&pool, john.id).await?.is_none());

    // A second delete of the same id finds nothing to remove.
    assert!(!platform_db::delete_employee(&pool, john.id).await?);

    let listed = platform_db::list_employees(&pool).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, jane.id);
    Ok(())
}

#[tokio::test]
async fn delete_of_unknown_id_touches_nothing() -> Result<()> {
    let pool = memory_pool().await?;
    platform_db::create_employee(&pool, "Ada", "Engineering").await?;

    assert!(!platform_db::delete_employee(&pool, 9999).await?);
    assert_eq!(platform_db::list_employees(&pool).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn listing_an_empty_store_yields_no_rows() -> Result<()> {
    let pool = memory_pool().await?;
    assert!(platform_db::list_employees(&pool).await?.is_empty());
    Ok(())
}
