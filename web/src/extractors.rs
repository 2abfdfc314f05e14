//! Custom Axum extractors.
//!
//! - `Xhr`: whether the request was sent by page script rather than a form post
//! - `ListPath` / `TodoPath`: list and todo ids from the URL

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, HeaderMap},
};
use listkeeper_core::{ListId, TodoId};
use std::convert::Infallible;

/// Header set by script-initiated requests.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// Value of [`REQUESTED_WITH_HEADER`] marking an asynchronous request.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Whether the request is asynchronous.
///
/// Delete endpoints answer XHR callers with a bare status or path instead of
/// a redirect, so the page script can update in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xhr(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for Xhr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(is_xhr(&parts.headers)))
    }
}

fn is_xhr(headers: &HeaderMap) -> bool {
    headers
        .get(REQUESTED_WITH_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == XML_HTTP_REQUEST)
}

/// Parses a path segment as an id. Anything that is not an unsigned integer
/// maps to id 0, which is never assigned, so lookups report "not found"
/// instead of the router rejecting the request.
fn lenient_id(raw: &str) -> u64 {
    raw.parse().unwrap_or(0)
}

/// The `:id` segment of `/lists/:id/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPath(pub ListId);

#[async_trait]
impl<S> FromRequestParts<S> for ListPath
where
    S: Send + Sync,
{
    type Rejection = <Path<String> as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(ListId::new(lenient_id(&raw))))
    }
}

/// The `:id` and `:todo_id` segments of `/lists/:id/todos/:todo_id/...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoPath(pub ListId, pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = <Path<(String, String)> as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((list, todo)) = Path::<(String, String)>::from_request_parts(parts, state).await?;
        Ok(Self(ListId::new(lenient_id(&list)), TodoId::new(lenient_id(&todo))))
    }
}
