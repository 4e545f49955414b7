mod common;

#[test]
fn test_creates_a_usable_database() {
    let test_db = common::TestDb::new("test_creates_a_usable_database.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
