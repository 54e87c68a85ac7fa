use strata::session::Engine;
use strata::{storage, Database, StatementOutput, StrataError};
use tempfile::TempDir;

fn all_rows(db: &mut Database, sql: &str) -> Vec<Vec<String>> {
    let mut outcome = db.run_query(sql);
    assert_eq!(outcome.results.len(), 1);
    match outcome.results.remove(0) {
        Ok(StatementOutput::Rows(result)) => result.rows,
        other => panic!("expected rows, got {other:?}"),
    }
}

#[test]
fn create_insert_select_round_trip() {
    let mut db = Database::new("testing");

    let outcome = db.run_query(
        "CREATE TABLE employees(employeeID number primary key, employeeName string not null);",
    );
    assert!(outcome.all_ok());

    let outcome = db.run_query("INSERT INTO employees * VALUES (23, Alice);");
    assert!(outcome.all_ok());

    let rows = all_rows(&mut db, "SELECT primary_key, employeeName FROM employees;");
    assert_eq!(rows, vec![vec!["23".to_string(), "Alice".to_string()]]);
}

#[test]
fn created_table_is_retrievable_with_declared_columns_in_order() {
    let mut db = Database::new("testing");
    db.run_query(
        "create table parts (partID number primary key, name string not null, shelf string);",
    );

    let table = db.table("parts").expect("table should be registered");
    let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["partID", "name", "shelf"]);
}

#[test]
fn create_without_primary_key_registers_no_table() {
    let mut db = Database::new("testing");
    let outcome = db.run_query("create table t (a number, b string);");
    assert!(matches!(
        outcome.first_error(),
        Some(StrataError::MissingPrimaryKey(_))
    ));
    assert!(db.table("t").is_none());
}

#[test]
fn foreign_keys_are_validated_at_create_time() {
    let mut db = Database::new("testing");
    db.run_query("create table users (id number primary key);");

    // Self-reference.
    let outcome =
        db.run_query("create table t (id number primary key, p number references t(id));");
    assert!(matches!(
        outcome.first_error(),
        Some(StrataError::ForeignKey(_))
    ));
    assert!(db.table("t").is_none());

    // Dangling table.
    let outcome =
        db.run_query("create table t (id number primary key, p number references ghosts(id));");
    assert!(matches!(
        outcome.first_error(),
        Some(StrataError::ForeignKey(_))
    ));

    // Dangling column.
    let outcome =
        db.run_query("create table t (id number primary key, p number references users(ghost));");
    assert!(matches!(
        outcome.first_error(),
        Some(StrataError::ForeignKey(_))
    ));

    // Valid reference.
    let outcome =
        db.run_query("create table t (id number primary key, p number references users(id));");
    assert!(outcome.all_ok());
}

#[test]
fn a_failed_statement_does_not_abort_the_batch() {
    let mut db = Database::new("testing");
    let outcome = db.run_query(
        "create table a (id number primary key);\n\
         select nope from ghosts;\n\
         insert into a (id) values (7);",
    );

    assert_eq!(outcome.results.len(), 3);
    assert!(outcome.results[0].is_ok());
    assert!(matches!(
        outcome.results[1],
        Err(StrataError::TableNotFound(_))
    ));
    assert!(outcome.results[2].is_ok());
    assert_eq!(db.table("a").unwrap().len(), 1);
}

#[test]
fn composite_primary_keys_are_enforced() {
    let mut db = Database::new("testing");
    db.run_query(
        "create table seats (hall string primary key, seat number primary key, guest string);",
    );
    assert!(db
        .run_query("insert into seats * values (west, 1, Ada);")
        .all_ok());
    assert!(db
        .run_query("insert into seats * values (west, 2, Grace);")
        .all_ok());

    // Same composite key.
    let outcome = db.run_query("insert into seats * values (west, 1, Alan);");
    assert!(matches!(
        outcome.first_error(),
        Some(StrataError::ConstraintViolation(_))
    ));
    assert_eq!(db.table("seats").unwrap().len(), 2);
}

#[test]
fn select_with_where_parses_and_returns_rows() {
    let mut db = Database::new("testing");
    db.run_query("create table t (id number primary key, v string);");
    db.run_query("insert into t * values (1, x); insert into t * values (2, y);");

    // The predicate is parsed and validated; row filtering is outside the
    // executor's scope, so both rows come back.
    let rows = all_rows(&mut db, "select id from t where id = 1 and v = x;");
    assert_eq!(rows.len(), 2);
}

#[test]
fn quoted_string_values_survive_the_pipeline() {
    let mut db = Database::new("testing");
    db.run_query("create table notes (id number primary key, body string);");
    assert!(db
        .run_query("insert into notes (id, body) values (1, \"hello, world\");")
        .all_ok());

    let rows = all_rows(&mut db, "select body from notes;");
    assert_eq!(rows, vec![vec!["hello, world".to_string()]]);
}

#[test]
fn whole_database_round_trips_through_storage() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("testing.db");

    let mut db = Database::new("testing");
    db.run_query(
        "create table users (id number primary key, name string not null, note string); \
         create table orders (orderID number primary key, userID number references users(id));",
    );
    db.run_query("insert into users (id, name) values (1, Alice);");
    db.run_query("insert into orders * values (10, 1);");

    storage::save(&db, &path).unwrap();
    let mut loaded = storage::load(&path).unwrap();

    let before = {
        let mut rows = all_rows(&mut db, "select primary_key, name, note from users;");
        rows.sort();
        rows
    };
    let after = {
        let mut rows = all_rows(&mut loaded, "select primary_key, name, note from users;");
        rows.sort();
        rows
    };
    assert_eq!(before, after);

    // Schema survives too: the foreign key still validates new tables.
    let outcome = loaded
        .run_query("create table refunds (id number primary key, orderID number references orders(orderID));");
    assert!(outcome.all_ok());
}

#[test]
fn session_manages_named_databases() {
    let dir = TempDir::new().unwrap();
    let mut engine = Engine::new(dir.path());

    engine.run_command("create database inventory;").unwrap();
    engine.run_command("inventory").unwrap();

    let db = engine.current_mut().unwrap();
    assert!(db
        .run_query(
            "create table items (id number primary key, name string not null); \
             insert into items (id, name) values (1, bolt);"
        )
        .all_ok());
    engine.save_current().unwrap();

    let mut engine = Engine::new(dir.path());
    engine.run_command("inventory").unwrap();
    let items = engine.current().unwrap().table("items").unwrap();
    assert_eq!(items.row_value("1", "name"), Some("bolt"));

    engine.run_command("drop database inventory;").unwrap();
    assert!(engine.current().is_none());
    let err = engine.enter_database("inventory").unwrap_err();
    assert!(matches!(err, StrataError::DatabaseNotFound(_)));
}
