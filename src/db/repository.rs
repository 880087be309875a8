//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the API layer.
//!
//! Methods return `Send` futures so handlers generic over [`Database`] can be
//! spawned by axum.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{NewTodo, Todo, TodoChanges},
};

/// Repository for Todo operations.
///
/// Id-addressed operations return `None` when no record has that id.
pub trait TodoRepository {
    /// Get all todos in insertion order.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Todo>>> + Send;

    /// Get a todo by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Create a new todo. The store assigns `id` and `created_at`.
    fn create(&self, todo: &NewTodo) -> impl Future<Output = DbResult<Todo>> + Send;

    /// Replace the given fields of an existing todo.
    fn update(
        &self,
        id: &str,
        changes: &TodoChanges,
    ) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Delete a todo by ID, returning the removed record.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<Option<Todo>>> + Send;

    /// Number of stored todos.
    fn count(&self) -> impl Future<Output = DbResult<usize>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Todos<'a>: TodoRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the todo repository.
    fn todos(&self) -> Self::Todos<'_>;
}
