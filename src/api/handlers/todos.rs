//! Todo management handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::api::error::{ApiError, ErrorResponse, FieldError, ValidationErrorResponse};
use crate::db::{Database, NewTodo, Todo, TodoChanges, TodoRepository};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Todo response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct TodoResponse {
    /// Unique identifier (32-character hex)
    #[schema(example = "9f1c2e7a4b3d4c5e8f6a7b8c9d0e1f2a")]
    pub id: String,
    /// Todo name
    #[serde(rename = "Name")]
    #[schema(example = "Buy milk")]
    pub name: String,
    /// Todo description
    #[serde(rename = "Description")]
    #[schema(example = "2%")]
    pub description: String,
    /// Creation timestamp (RFC 3339)
    #[serde(rename = "createdAt")]
    #[schema(value_type = String, example = "2025-01-01T00:00:00.000Z")]
    pub created_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            created_at: t.created_at,
        }
    }
}

/// Create todo request DTO
///
/// Both fields are optional at the wire level so that missing fields are
/// reported as field errors instead of a body rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Todo name (required, non-empty)
    #[serde(rename = "Name", alias = "name", default)]
    #[schema(example = "Buy milk")]
    pub name: Option<String>,
    /// Todo description (required, non-empty)
    #[serde(rename = "Description", alias = "description", default)]
    #[schema(example = "2%")]
    pub description: Option<String>,
}

impl CreateTodoRequest {
    /// Check required fields, reporting every failing field.
    pub fn validate(self) -> Result<NewTodo, Vec<FieldError>> {
        let name = self.name.filter(|s| !s.is_empty());
        let description = self.description.filter(|s| !s.is_empty());

        match (name, description) {
            (Some(name), Some(description)) => Ok(NewTodo { name, description }),
            (name, description) => {
                let mut errors = Vec::new();
                if name.is_none() {
                    errors.push(FieldError::required("Name"));
                }
                if description.is_none() {
                    errors.push(FieldError::required("Description"));
                }
                Err(errors)
            }
        }
    }
}

/// Update todo request DTO
///
/// Absent fields keep their stored value; an explicit `null` is rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(
        rename = "Name",
        alias = "name",
        default,
        deserialize_with = "crate::serde_utils::nullable"
    )]
    #[schema(value_type = Option<String>, example = "Buy oat milk")]
    pub name: Option<Option<String>>,
    #[serde(
        rename = "Description",
        alias = "description",
        default,
        deserialize_with = "crate::serde_utils::nullable"
    )]
    #[schema(value_type = Option<String>, example = "2%")]
    pub description: Option<Option<String>>,
}

impl UpdateTodoRequest {
    /// Turn the body into field changes, reporting every field sent as `null`.
    pub fn into_changes(self) -> Result<TodoChanges, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = present_or_error("Name", self.name, &mut errors);
        let description = present_or_error("Description", self.description, &mut errors);

        if errors.is_empty() {
            Ok(TodoChanges { name, description })
        } else {
            Err(errors)
        }
    }
}

fn present_or_error(
    field: &str,
    value: Option<Option<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(None) => {
            errors.push(FieldError::required(field));
            None
        }
        Some(Some(v)) => Some(v),
        None => None,
    }
}

/// Confirmation message DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Todo deleted")]
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// List all todos
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = "todos",
    responses(
        (status = 200, description = "All todos", body = [TodoResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = state.db().todos().list().await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    tag = "todos",
    params(
        ("id" = String, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = state
        .db()
        .todos()
        .get(&id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Create a new todo
///
/// Validates the body before anything is written
#[utoipa::path(
    post,
    path = "/api/todos",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 400, description = "Missing or empty fields, or a malformed body", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    // A body that is not declared as JSON reads as `{}`, so it is reported
    // field by field
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) => CreateTodoRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };
    let new_todo = req.validate().map_err(ApiError::Validation)?;

    let todo = state.db().todos().create(&new_todo).await?;
    info!(id = %todo.id, "todo created");

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// Update a todo
///
/// Replaces the provided fields; `id` and `createdAt` never change
#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = "todos",
    params(
        ("id" = String, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 400, description = "Empty or null field provided", body = ValidationErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Json(req) = payload?;
    let changes = req.into_changes().map_err(ApiError::Validation)?;

    let todo = state
        .db()
        .todos()
        .update(&id, &changes)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(id = %todo.id, "todo updated");

    Ok(Json(TodoResponse::from(todo)))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = "todos",
    params(
        ("id" = String, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .db()
        .todos()
        .delete(&id)
        .await?
        .ok_or(ApiError::NotFound)?;
    info!(%id, "todo deleted");

    Ok(Json(MessageResponse {
        message: "Todo deleted".to_string(),
    }))
}
