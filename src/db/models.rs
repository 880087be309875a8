//! Domain models for the todo record store.
//!
//! These models are storage-agnostic. `Todo` is what the store hands back;
//! `NewTodo` and `TodoChanges` are the write payloads and carry the
//! required-field rules every write has to satisfy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::{DbError, DbResult};

/// A stored todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier (32 lowercase hex chars).
    pub id: String,
    pub name: String,
    pub description: String,
    /// Set once by the store at creation.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub description: String,
}

impl NewTodo {
    /// Check the required fields. The first empty field is reported.
    pub fn validate(&self) -> DbResult<()> {
        require_non_empty("Name", &self.name)?;
        require_non_empty("Description", &self.description)
    }
}

/// Field replacements for an existing todo.
///
/// Absent fields are left untouched; present fields must still satisfy the
/// required-field rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TodoChanges {
    pub fn validate(&self) -> DbResult<()> {
        if let Some(name) = &self.name {
            require_non_empty("Name", name)?;
        }
        if let Some(description) = &self.description {
            require_non_empty("Description", description)?;
        }
        Ok(())
    }

    /// True when the changes would not modify any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

fn require_non_empty(field: &str, value: &str) -> DbResult<()> {
    if value.is_empty() {
        return Err(DbError::Validation {
            field: field.to_string(),
            message: format!("{} is required", field),
        });
    }
    Ok(())
}
