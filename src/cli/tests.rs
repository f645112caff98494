use super::*;
use crate::types::{OutputFormat, RowPolicy, StoreConfig};

fn run_session(db: &mut Database, input: &str) -> String {
    let mut output = Vec::new();
    Menu::new(db, input.as_bytes(), &mut output).run().unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_menu_choice_numbers() {
    assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::CreateTable));
    assert_eq!(MenuChoice::from_number(5), Some(MenuChoice::Exit));
    assert_eq!(MenuChoice::from_number(0), None);
    assert_eq!(MenuChoice::from_number(6), None);
}

#[test]
fn test_session_create_add_display() {
    let mut db = Database::default();
    let transcript = run_session(
        &mut db,
        "1\nusers\n2\nid name\n3\nusers\n1\nAlice\n4\nusers\n5\n",
    );

    assert!(transcript.contains("--- Database Management ---"));
    assert!(transcript.contains("Enter column names:"));
    assert!(transcript.contains("Table \"users\" created successfully."));
    assert!(transcript.contains("Enter values for the following columns:"));
    assert!(transcript.contains("id: name: "));
    assert!(transcript.contains("Row added to table \"users\"."));
    assert!(transcript.contains("id\tname\n1\tAlice\n"));
    assert!(transcript.ends_with("Exiting program. Goodbye!\n"));

    assert_eq!(db.get_table("users").unwrap().row_count(), 1);
}

#[test]
fn test_session_duplicate_table() {
    let mut db = Database::default();
    let transcript = run_session(&mut db, "1 users 2 id email\n1 users 1 x\n5\n");

    assert!(transcript.contains("Table with name \"users\" already exists."));
    assert_eq!(db.get_table("users").unwrap().columns(), &["id", "email"]);
}

#[test]
fn test_session_list_tables() {
    let mut db = Database::default();
    let transcript = run_session(&mut db, "2\n1 b 1 x\n1 a 1 y\n2\n5\n");

    assert!(transcript.contains("No tables in the database."));
    assert!(transcript.contains("Tables in the database:\nb\na\n"));
}

#[test]
fn test_session_missing_tables() {
    let mut db = Database::default();
    let transcript = run_session(&mut db, "3\nghost\n4\nghost\n5\n");

    assert_eq!(transcript.matches("Table \"ghost\" does not exist.").count(), 2);
    assert!(!transcript.contains("Enter values for the following columns:"));
    assert!(db.is_empty());
}

#[test]
fn test_session_invalid_input() {
    let mut db = Database::default();
    let transcript = run_session(&mut db, "abc def\n9\n1 t zero\n1 t -2\n5\n");

    assert_eq!(
        transcript.matches("Invalid input. Please enter a number.").count(),
        1
    );
    assert!(transcript.contains("Invalid choice. Please try again."));
    assert_eq!(transcript.matches("Invalid column count.").count(), 2);
    assert!(db.is_empty());
}

#[test]
fn test_session_choice_must_be_whole_number() {
    let mut db = Database::default();
    let transcript = run_session(&mut db, "2x\n2\n5\n");

    assert_eq!(
        transcript.matches("Invalid input. Please enter a number.").count(),
        1
    );
    assert_eq!(transcript.matches("No tables in the database.").count(), 1);
}

#[test]
fn test_session_ends_at_end_of_input() {
    let mut db = Database::default();
    let transcript = run_session(&mut db, "1\nhalf\n");

    assert!(transcript.ends_with("Enter number of columns: "));
    assert!(db.is_empty());
}

#[test]
fn test_session_display_missing_value() {
    let mut db = Database::default();
    db.create_table("t", vec!["a".to_string(), "b".to_string()])
        .unwrap();
    db.add_row("t", Row::new().with("a", "1")).unwrap();

    let transcript = run_session(&mut db, "4 t 5\n");
    assert!(transcript.contains("Table \"t\" has a row with no value for column \"b\"."));
}

#[test]
fn test_session_custom_delimiter_and_json() {
    let mut db = Database::new(StoreConfig {
        delimiter: " | ".to_string(),
        ..StoreConfig::default()
    });
    let transcript = run_session(&mut db, "1 t 2 a b 3 t 1 2 4 t 5\n");
    assert!(transcript.contains("a | b\n1 | 2\n"));

    let mut db = Database::new(StoreConfig {
        output_format: OutputFormat::Json,
        ..StoreConfig::default()
    });
    let transcript = run_session(&mut db, "1 t 1 a 3 t x 4 t 5\n");
    assert!(transcript.contains("\"columns\""));
    assert!(transcript.contains("\"x\""));
}

#[test]
fn test_session_strict_policy_accepts_prompted_rows() {
    let mut db = Database::new(StoreConfig {
        row_policy: RowPolicy::Strict,
        ..StoreConfig::default()
    });
    let transcript = run_session(&mut db, "1 t 2 a b 3 t 1 2 5\n");

    assert!(transcript.contains("Row added to table \"t\"."));
    assert_eq!(db.get_table("t").unwrap().row_count(), 1);
}

#[test]
fn test_describe_messages() {
    assert_eq!(
        describe("t", &DatabaseError::UnknownColumn("z".to_string())),
        "Table \"t\" has no column \"z\"."
    );
    assert_eq!(
        describe("t", &DatabaseError::TableAlreadyExists("t".to_string())),
        "Table with name \"t\" already exists."
    );
}
