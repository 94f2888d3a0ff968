//! Tests for database initialization and sample fixtures

use gigbook_common::db::artists::create_artist;
use gigbook_common::db::init::init_database;
use gigbook_common::db::seed::seed_if_empty;
use gigbook_common::db::ArtistFields;
use tempfile::TempDir;

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("nested").join("gigbook.db");

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("gigbook.db");

    let pool1 = init_database(&db_path).await.unwrap();
    pool1.close().await;

    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_schema_tables_created() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(tables, vec!["artists", "shows", "venues"]);
}

#[tokio::test]
async fn test_foreign_keys_enforced_on_every_connection() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();

    // Hold several connections so the check is not limited to the first one
    let mut conns = Vec::new();
    for _ in 0..3 {
        conns.push(pool.acquire().await.unwrap());
    }

    for conn in conns.iter_mut() {
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(&mut **conn)
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}

#[tokio::test]
async fn test_seed_if_empty_loads_once() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();

    assert!(seed_if_empty(&pool).await.unwrap());
    assert!(!seed_if_empty(&pool).await.unwrap(), "second seed must be a no-op");

    let venues: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(&pool)
        .await
        .unwrap();
    let artists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(&pool)
        .await
        .unwrap();
    let shows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!((venues, artists, shows), (3, 3, 5));
}

#[tokio::test]
async fn test_seed_skipped_when_only_artists_exist() {
    let dir = TempDir::new().unwrap();
    let pool = init_database(&dir.path().join("gigbook.db")).await.unwrap();

    // Ids 1-6 overlap the fixture artist ids
    for name in ["One", "Two", "Three", "Four", "Five", "Six"] {
        let fields = ArtistFields {
            name: name.to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            ..Default::default()
        };
        create_artist(&pool, &fields).await.unwrap();
    }

    let seeded = seed_if_empty(&pool).await;
    assert!(matches!(seeded, Ok(false)), "got {:?}", seeded);

    let venues: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(&pool)
        .await
        .unwrap();
    let artists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!((venues, artists), (0, 6));
}
