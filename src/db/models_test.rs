//! Tests for the todo model and its required-field rules.

use crate::db::{DbError, NewTodo, TodoChanges};

fn new_todo(name: &str, description: &str) -> NewTodo {
    NewTodo {
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[test]
fn new_todo_with_both_fields_is_valid() {
    assert!(new_todo("Buy milk", "2%").validate().is_ok());
}

#[test]
fn new_todo_with_empty_name_is_rejected() {
    let err = new_todo("", "2%").validate().unwrap_err();
    match err {
        DbError::Validation { field, message } => {
            assert_eq!(field, "Name");
            assert_eq!(message, "Name is required");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn new_todo_with_empty_description_is_rejected() {
    let err = new_todo("Buy milk", "").validate().unwrap_err();
    assert!(matches!(err, DbError::Validation { ref field, .. } if field == "Description"));
}

#[test]
fn new_todo_reports_name_first() {
    let err = new_todo("", "").validate().unwrap_err();
    assert!(matches!(err, DbError::Validation { ref field, .. } if field == "Name"));
}

#[test]
fn empty_changes_are_valid_and_empty() {
    let changes = TodoChanges::default();
    assert!(changes.is_empty());
    assert!(changes.validate().is_ok());
}

#[test]
fn changes_with_empty_provided_field_are_rejected() {
    let changes = TodoChanges {
        name: None,
        description: Some(String::new()),
    };
    assert!(!changes.is_empty());
    let err = changes.validate().unwrap_err();
    assert!(matches!(err, DbError::Validation { ref field, .. } if field == "Description"));
}

#[test]
fn partial_changes_are_valid() {
    let changes = TodoChanges {
        name: Some("Buy oat milk".to_string()),
        description: None,
    };
    assert!(changes.validate().is_ok());
}
