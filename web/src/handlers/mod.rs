//! HTTP request handlers.
//!
//! Mutating handlers follow one shape: [`dispatch`] runs the command against
//! the session's lists, then the handler picks a response for the outcome.
//!
//! | Outcome | Response |
//! |---|---|
//! | accepted | redirect, with the event's flash |
//! | validation error | originating form re-rendered, `422` |
//! | not found | redirect to `/lists` with an error flash |

pub mod health;
pub mod lists;
pub mod todos;

use crate::error::AppError;
use crate::flash::Flash;
use crate::metrics;
use crate::session::ListsSession;
use crate::WebResult;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use listkeeper_core::{
    ErrorKind, ListError, ListId, ListsAction, ListsEvent, ListsReducer, ListsState, Reducer,
};
use serde::Deserialize;

pub use health::{health_check, metrics_endpoint};

/// Landing page for lists, and the target of every not-found redirect
pub const LISTS_PATH: &str = "/lists";

/// Path of a single list's page
#[must_use]
pub fn list_path(id: ListId) -> String {
    format!("{LISTS_PATH}/{id}")
}

/// Body of the create and rename forms
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListNameForm {
    /// Requested list name
    pub list_name: String,
}

/// Body of the add-todo form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TodoForm {
    /// Requested todo name
    pub todo: String,
}

/// Body of the check form
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompletionForm {
    /// `"true"` to complete the todo; anything else reopens it
    pub completed: String,
}

impl CompletionForm {
    /// Whether the todo should end up completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed == "true"
    }
}

/// Runs `action` against the session's lists.
///
/// Accepted commands are written back to the session before returning.
/// Returns the state as it is after the command, alongside the outcome.
///
/// # Errors
///
/// Returns an error only when the session store fails; domain rejections are
/// part of the `Ok` value.
pub async fn dispatch(
    session: &ListsSession,
    action: ListsAction,
) -> Result<(ListsState, Result<ListsEvent, ListError>), AppError> {
    let mut state = session.load().await?;

    match ListsReducer::new().reduce(&mut state, action) {
        Ok(event) => {
            session.save(&state).await?;
            metrics::record_event(&event);
            tracing::info!(list_id = %event.list_id(), ?event, "Command accepted");
            Ok((state, Ok(event)))
        }
        Err(error) => {
            metrics::record_rejection(&error);
            tracing::info!(kind = error.kind().as_str(), %error, "Command rejected");
            Ok((state, Err(error)))
        }
    }
}

/// Redirects to `to`, queuing the event's confirmation if it has one.
async fn accepted(
    session: &ListsSession,
    event: &ListsEvent,
    to: &str,
) -> WebResult<Response> {
    if let Some(flash) = Flash::for_event(event) {
        session.set_flash(flash).await?;
    }
    Ok(Redirect::to(to).into_response())
}

/// Redirects to the lists page with `error` as the flash.
async fn not_found(session: &ListsSession, error: &ListError) -> WebResult<Response> {
    tracing::debug!(%error, "Redirecting to lists");
    session.set_flash(Flash::from(error)).await?;
    Ok(Redirect::to(LISTS_PATH).into_response())
}

/// Responds to a rejected command: missing targets redirect away, invalid
/// input gets its form back through `rerender`.
///
/// The re-rendered form is a page render, so it consumes any pending flash;
/// the validation error takes its place in the banner.
async fn rejected(
    session: &ListsSession,
    error: &ListError,
    rerender: impl FnOnce(&Flash) -> Result<String, AppError>,
) -> WebResult<Response> {
    match error.kind() {
        ErrorKind::NotFound => not_found(session, error).await,
        ErrorKind::Validation => {
            if let Some(stale) = session.take_flash().await? {
                tracing::debug!(message = %stale.message, "Replacing pending flash");
            }
            let html = rerender(&Flash::from(error))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}
