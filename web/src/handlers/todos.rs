//! Todo commands. All of them live under `/lists/:id/todos`.

use super::{accepted, dispatch, list_path, not_found, rejected, CompletionForm, TodoForm};
use crate::error::AppError;
use crate::extractors::{ListPath, TodoPath, Xhr};
use crate::session::ListsSession;
use crate::state::AppState;
use crate::WebResult;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use listkeeper_core::ListsAction;

/// `POST /lists/:id/todos`
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn add_todo(
    State(app): State<AppState>,
    session: ListsSession,
    ListPath(list_id): ListPath,
    Form(form): Form<TodoForm>,
) -> WebResult<Response> {
    let action = ListsAction::AddTodo {
        list_id,
        name: form.todo.clone(),
    };

    match dispatch(&session, action).await? {
        (_, Ok(event)) => accepted(&session, &event, &list_path(list_id)).await,
        (lists, Err(error)) => {
            rejected(&session, &error, |flash| {
                let list = lists
                    .list(list_id)
                    .ok_or_else(|| AppError::not_found(error.to_string()))?;
                Ok(app.views.list_page(list, &form.todo, Some(flash))?)
            })
            .await
        }
    }
}

/// `POST /lists/:id/todos/:todo_id/delete`
///
/// Script callers get a bare `204`, or `404`.
///
/// # Errors
///
/// Returns an error if the session fails.
pub async fn delete_todo(
    session: ListsSession,
    TodoPath(list_id, todo_id): TodoPath,
    Xhr(xhr): Xhr,
) -> WebResult<Response> {
    let action = ListsAction::DeleteTodo { list_id, todo_id };

    match (dispatch(&session, action).await?, xhr) {
        ((_, Ok(_)), true) => Ok(StatusCode::NO_CONTENT.into_response()),
        ((_, Ok(event)), false) => accepted(&session, &event, &list_path(list_id)).await,
        ((_, Err(_)), true) => Ok(StatusCode::NOT_FOUND.into_response()),
        ((_, Err(error)), false) => not_found(&session, &error).await,
    }
}

/// `POST /lists/:id/todos/:todo_id/check`
///
/// # Errors
///
/// Returns an error if the session fails.
pub async fn check_todo(
    session: ListsSession,
    TodoPath(list_id, todo_id): TodoPath,
    Form(form): Form<CompletionForm>,
) -> WebResult<Response> {
    let action = ListsAction::SetTodoCompletion {
        list_id,
        todo_id,
        completed: form.is_completed(),
    };

    match dispatch(&session, action).await? {
        (_, Ok(event)) => accepted(&session, &event, &list_path(list_id)).await,
        (_, Err(error)) => not_found(&session, &error).await,
    }
}

/// `POST /lists/:id/todos/complete_all`
///
/// # Errors
///
/// Returns an error if the session fails.
pub async fn complete_all(
    session: ListsSession,
    ListPath(list_id): ListPath,
) -> WebResult<Response> {
    match dispatch(&session, ListsAction::CompleteAll { list_id }).await? {
        (_, Ok(event)) => accepted(&session, &event, &list_path(list_id)).await,
        (_, Err(error)) => not_found(&session, &error).await,
    }
}
