use modelapi::infrastructure::persistence::Database;
use uuid::Uuid;

pub struct TestDatabase {
    db: Database,
    path: String,
}

impl TestDatabase {
    pub fn db(&self) -> &Database {
        &self.db
    }
}

pub async fn setup_test_db() -> TestDatabase {
    // File-based SQLite, unique per test for parallel execution
    let path = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", path);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    db.run_migrations()
        .await
        .expect("Failed to run migrations");

    TestDatabase { db, path }
}

pub async fn teardown_test_db(test_db: TestDatabase) {
    test_db.db.close().await;
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", test_db.path, suffix));
    }
}

pub async fn count_images(db: &Database) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) AS count FROM images")
        .fetch_one(db.pool())
        .await
        .expect("Failed to count images");
    row.0
}
