//! Store-level tests against an in-memory database: lookups, idempotent
//! deletes, and the caller-owned unit-of-work contract.

use rollbook::{
    config::RuntimeConfiguration,
    data::{
        DataType,
        student::{NewStudent, Student},
    },
    error::RollbookError,
    state::AppState,
};
use sqlx::sqlite::SqlitePoolOptions;

/// One connection so every acquire sees the same in-memory database.
async fn seeded_state() -> AppState {
    let options = SqlitePoolOptions::new().max_connections(1);
    let config = RuntimeConfiguration::with_db_path("sqlite::memory:");
    let state = AppState::new(options, config)
        .await
        .expect("unable to create state");

    let mut conn = state
        .get_connection()
        .await
        .expect("unable to get connection");
    sqlx::query("INSERT INTO students (id, name) VALUES (1, 'Amy'), (3, 'Ben')")
        .execute(&mut *conn)
        .await
        .expect("unable to seed students");

    state
}

#[tokio::test]
async fn get_by_id_returns_persisted_name() {
    let state = seeded_state().await;
    let mut conn = state.get_connection().await.unwrap();

    let student = Student::get_from_db_by_id(1, &mut conn)
        .await
        .unwrap()
        .expect("student 1 should exist");

    assert_eq!(student.id, 1);
    assert_eq!(student.name, "Amy");
}

#[tokio::test]
async fn get_by_unknown_id_is_absent() {
    let state = seeded_state().await;
    let mut conn = state.get_connection().await.unwrap();

    for id in [2, 999, 0, -7] {
        let found = Student::get_from_db_by_id(id, &mut conn).await.unwrap();
        assert!(found.is_none(), "id {id} should have no row");
    }
}

#[tokio::test]
async fn delete_inside_transaction_rolls_back() {
    let state = seeded_state().await;

    let mut tx = state.get_transaction().await.unwrap();
    Student::remove_from_database(1, &mut tx).await.unwrap();
    assert!(
        Student::get_from_db_by_id(1, &mut tx)
            .await
            .unwrap()
            .is_none(),
        "delete should be visible inside its own transaction"
    );
    tx.rollback().await.unwrap();

    let mut conn = state.get_connection().await.unwrap();
    let student = Student::get_from_db_by_id(1, &mut conn).await.unwrap();
    assert_eq!(
        student.map(|student| student.name),
        Some("Amy".to_string()),
        "rolled-back delete should leave the row in place"
    );
}

#[tokio::test]
async fn committed_delete_removes_row() {
    let state = seeded_state().await;

    let mut tx = state.get_transaction().await.unwrap();
    Student::remove_from_database(1, &mut tx).await.unwrap();
    tx.commit().await.unwrap();

    let mut conn = state.get_connection().await.unwrap();
    assert!(
        Student::get_from_db_by_id(1, &mut conn)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn delete_is_idempotent() {
    let state = seeded_state().await;
    let mut conn = state.get_connection().await.unwrap();

    Student::remove_from_database(1, &mut conn).await.unwrap();
    Student::remove_from_database(1, &mut conn).await.unwrap();
    Student::remove_from_database(4242, &mut conn).await.unwrap();
}

#[tokio::test]
async fn insert_assigns_usable_id() {
    let state = seeded_state().await;

    let mut tx = state.get_transaction().await.unwrap();
    let created = Student::insert_into_database(
        NewStudent {
            name: "Cleo".to_string(),
        },
        &mut tx,
    )
    .await
    .unwrap();
    tx.commit().await.unwrap();

    assert!(created.id > 3, "assigned id should not collide with seeds");

    let mut conn = state.get_connection().await.unwrap();
    let fetched = Student::get_from_db_by_id(created.id, &mut conn)
        .await
        .unwrap()
        .expect("created student should be retrievable");
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "Cleo");
}

#[tokio::test]
async fn insert_rejects_blank_name() {
    let state = seeded_state().await;
    let mut conn = state.get_connection().await.unwrap();

    let err = Student::insert_into_database(
        NewStudent {
            name: "   ".to_string(),
        },
        &mut conn,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RollbookError::InvalidStudentName));
}
