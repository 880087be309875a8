//! SQLite TodoRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{DbResult, NewTodo, Todo, TodoChanges, TodoRepository};

const COLUMNS: &str = "id, name, description, created_at";

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn row_to_todo(row: &SqliteRow) -> Todo {
    Todo {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        created_at: row.get("created_at"),
    }
}

impl<'a> TodoRepository for SqliteTodoRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Todo>> {
        let rows = sqlx::query(&format!("SELECT {} FROM todo ORDER BY rowid", COLUMNS))
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(row_to_todo).collect())
    }

    async fn get(&self, id: &str) -> DbResult<Option<Todo>> {
        let row = sqlx::query(&format!("SELECT {} FROM todo WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_todo))
    }

    async fn create(&self, todo: &NewTodo) -> DbResult<Todo> {
        todo.validate()?;

        // Identity and timestamp are always store-assigned
        let created = Todo {
            id: generate_entity_id(),
            name: todo.name.clone(),
            description: todo.description.clone(),
            created_at: current_timestamp(),
        };

        sqlx::query("INSERT INTO todo (id, name, description, created_at) VALUES (?, ?, ?, ?)")
            .bind(&created.id)
            .bind(&created.name)
            .bind(&created.description)
            .bind(created.created_at)
            .execute(self.pool)
            .await?;

        Ok(created)
    }

    async fn update(&self, id: &str, changes: &TodoChanges) -> DbResult<Option<Todo>> {
        changes.validate()?;

        if changes.is_empty() {
            return self.get(id).await;
        }

        // Single statement so the read-modify-write is atomic per record.
        // created_at is never part of the SET list.
        let row = sqlx::query(&format!(
            "UPDATE todo SET name = COALESCE(?, name), description = COALESCE(?, description) \
             WHERE id = ? RETURNING {}",
            COLUMNS
        ))
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_todo))
    }

    async fn delete(&self, id: &str) -> DbResult<Option<Todo>> {
        let row = sqlx::query(&format!("DELETE FROM todo WHERE id = ? RETURNING {}", COLUMNS))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_todo))
    }

    async fn count(&self) -> DbResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todo")
            .fetch_one(self.pool)
            .await?;

        Ok(count as usize)
    }
}
