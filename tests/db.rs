use diesel::QueryDsl;
use diesel::RunQueryDsl;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new("test_in_memory_connection.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}

#[test]
fn test_migrations_create_the_schema() {
    let test_db = common::TestDb::new("test_schema.db");
    let mut conn = test_db.pool().get().unwrap();

    let trips: i64 = sangihe_trip::schema::trips::table
        .count()
        .get_result(&mut conn)
        .unwrap();
    let destinations: i64 = sangihe_trip::schema::destinations::table
        .count()
        .get_result(&mut conn)
        .unwrap();

    assert_eq!(trips, 0);
    assert_eq!(destinations, 0);
}

#[test]
fn test_foreign_keys_are_enforced() {
    let test_db = common::TestDb::new("test_foreign_keys.db");
    let mut conn = test_db.pool().get().unwrap();

    // A review pointing at a missing destination must be rejected by the
    // foreign_keys pragma set on every pooled connection.
    let result = diesel::sql_query(
        "INSERT INTO reviews (destination_id, author_email, rating, comment) \
         VALUES (999, 'user@example.com', 5, 'bagus')",
    )
    .execute(&mut conn);

    assert!(result.is_err());
}
