//! List pages and list commands.

use super::{accepted, dispatch, list_path, not_found, rejected, ListNameForm, LISTS_PATH};
use crate::error::AppError;
use crate::extractors::{ListPath, Xhr};
use crate::session::ListsSession;
use crate::state::AppState;
use crate::WebResult;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use listkeeper_core::{ListError, ListsAction};

/// `GET /`
#[allow(clippy::unused_async)]
pub async fn index() -> Redirect {
    Redirect::to(LISTS_PATH)
}

/// `GET /lists`: every list, unfinished first.
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn list_lists(
    State(app): State<AppState>,
    session: ListsSession,
) -> WebResult<Html<String>> {
    let lists = session.load().await?;
    let flash = session.take_flash().await?;
    Ok(Html(app.views.lists_page(&lists, flash.as_ref())?))
}

/// `GET /lists/new`
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn new_list(
    State(app): State<AppState>,
    session: ListsSession,
) -> WebResult<Html<String>> {
    let flash = session.take_flash().await?;
    Ok(Html(app.views.new_list_page("", flash.as_ref())?))
}

/// `POST /lists`
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn create_list(
    State(app): State<AppState>,
    session: ListsSession,
    Form(form): Form<ListNameForm>,
) -> WebResult<Response> {
    let action = ListsAction::CreateList {
        name: form.list_name.clone(),
    };

    match dispatch(&session, action).await? {
        (_, Ok(event)) => accepted(&session, &event, LISTS_PATH).await,
        (_, Err(error)) => {
            rejected(&session, &error, |flash| {
                Ok(app.views.new_list_page(&form.list_name, Some(flash))?)
            })
            .await
        }
    }
}

/// `GET /lists/:id`: one list with its todos.
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn show_list(
    State(app): State<AppState>,
    session: ListsSession,
    ListPath(id): ListPath,
) -> WebResult<Response> {
    let lists = session.load().await?;
    let Some(list) = lists.list(id) else {
        return not_found(&session, &ListError::ListNotFound(id)).await;
    };

    let flash = session.take_flash().await?;
    Ok(Html(app.views.list_page(list, "", flash.as_ref())?).into_response())
}

/// `GET /lists/:id/edit`
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn edit_list(
    State(app): State<AppState>,
    session: ListsSession,
    ListPath(id): ListPath,
) -> WebResult<Response> {
    let lists = session.load().await?;
    let Some(list) = lists.list(id) else {
        return not_found(&session, &ListError::ListNotFound(id)).await;
    };

    let flash = session.take_flash().await?;
    Ok(Html(app.views.edit_list_page(list, &list.name, flash.as_ref())?).into_response())
}

/// `POST /lists/:id`: rename.
///
/// # Errors
///
/// Returns an error if the session or template fails.
pub async fn update_list(
    State(app): State<AppState>,
    session: ListsSession,
    ListPath(id): ListPath,
    Form(form): Form<ListNameForm>,
) -> WebResult<Response> {
    let action = ListsAction::RenameList {
        id,
        name: form.list_name.clone(),
    };

    match dispatch(&session, action).await? {
        (_, Ok(event)) => accepted(&session, &event, &list_path(id)).await,
        (lists, Err(error)) => {
            rejected(&session, &error, |flash| {
                let list = lists
                    .list(id)
                    .ok_or_else(|| AppError::not_found(error.to_string()))?;
                Ok(app.views.edit_list_page(list, &form.list_name, Some(flash))?)
            })
            .await
        }
    }
}

/// `POST /lists/:id/delete`
///
/// Script callers get `200` with the path to navigate to, or a bare `404`.
///
/// # Errors
///
/// Returns an error if the session fails.
pub async fn delete_list(
    session: ListsSession,
    ListPath(id): ListPath,
    Xhr(xhr): Xhr,
) -> WebResult<Response> {
    match (dispatch(&session, ListsAction::DeleteList { id }).await?, xhr) {
        ((_, Ok(_)), true) => Ok(LISTS_PATH.into_response()),
        ((_, Ok(event)), false) => accepted(&session, &event, LISTS_PATH).await,
        ((_, Err(_)), true) => Ok(StatusCode::NOT_FOUND.into_response()),
        ((_, Err(error)), false) => not_found(&session, &error).await,
    }
}
