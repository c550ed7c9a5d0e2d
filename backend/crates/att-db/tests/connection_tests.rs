mod common;

use common::{COURSE, LECTURE, STUDENT, TENANT, count_attendance_rows, seed, t0};

use att_core::AttendanceKey;
use att_db::{AttendanceLedger, connect, ping};

use tempfile::TempDir;

#[tokio::test]
async fn given_missing_directory_when_connected_then_database_created_and_migrated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("attendance.db");

    let pool = connect(&path, 2).await.unwrap();

    assert!(path.exists());
    assert!(ping(&pool).await.is_ok());
    assert_eq!(count_attendance_rows(&pool).await, 0);
}

#[tokio::test]
async fn given_existing_database_when_reconnected_then_migrations_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("attendance.db");

    let first = connect(&path, 1).await.unwrap();
    first.close().await;

    assert!(connect(&path, 1).await.is_ok());
}

#[tokio::test]
async fn given_many_connections_when_same_scan_races_then_one_row() {
    let dir = TempDir::new().unwrap();
    let pool = connect(&dir.path().join("attendance.db"), 8).await.unwrap();
    seed(&pool).await;
    let ledger = AttendanceLedger::new(pool.clone());
    let key = AttendanceKey::for_scan(TENANT, STUDENT, COURSE, LECTURE, t0());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let ledger = ledger.clone();
            tokio::spawn(async move {
                ledger
                    .mark_at(&key, t0() + chrono::Duration::seconds(i))
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().newly_created {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(count_attendance_rows(&pool).await, 1);
}

#[tokio::test]
async fn given_connected_pool_when_foreign_key_violated_then_rejected() {
    let dir = TempDir::new().unwrap();
    let pool = connect(&dir.path().join("attendance.db"), 1).await.unwrap();
    let ledger = AttendanceLedger::new(pool);

    let result = ledger.mark(TENANT, STUDENT, COURSE, LECTURE).await;

    assert!(result.is_err());
}
