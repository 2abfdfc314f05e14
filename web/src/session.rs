//! Per-user list storage on top of `tower-sessions`.
//!
//! Each request gets its own deserialized copy of the session's
//! [`ListsState`]; handlers mutate that copy and write it back. Two tabs
//! writing at once simply race, the last write wins.

use crate::error::AppError;
use crate::flash::Flash;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use listkeeper_core::ListsState;
use tower_sessions::Session;

/// Session key holding the serialized [`ListsState`]
pub const LISTS_KEY: &str = "lists";

/// Session key holding the pending [`Flash`]
pub const FLASH_KEY: &str = "flash";

/// Typed access to the lists and flash stored in a user's session.
///
/// Extracting it requires `SessionManagerLayer` on the router.
#[derive(Clone, Debug)]
pub struct ListsSession(Session);

impl ListsSession {
    /// Wraps a raw session
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Loads the user's lists; a fresh session has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails or holds undecodable data.
    pub async fn load(&self) -> Result<ListsState, AppError> {
        Ok(self.0.get(LISTS_KEY).await?.unwrap_or_default())
    }

    /// Replaces the user's lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self, lists: &ListsState) -> Result<(), AppError> {
        self.0.insert(LISTS_KEY, lists).await?;
        Ok(())
    }

    /// Queues a flash for the next rendered page, replacing any pending one.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn set_flash(&self, flash: Flash) -> Result<(), AppError> {
        self.0.insert(FLASH_KEY, flash).await?;
        Ok(())
    }

    /// Removes and returns the pending flash.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn take_flash(&self) -> Result<Option<Flash>, AppError> {
        Ok(self.0.remove(FLASH_KEY).await?)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListsSession
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state).await.map(Self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use listkeeper_core::{ListId, TodoList};
    use std::sync::Arc;
    use tower_sessions_moka_store::MokaStore;

    fn session() -> ListsSession {
        ListsSession::new(Session::new(None, Arc::new(MokaStore::new(None)), None))
    }

    #[tokio::test]
    async fn fresh_session_has_no_lists() {
        let state = session().load().await.unwrap();
        assert!(state.lists.is_empty());
    }

    #[tokio::test]
    async fn saved_lists_load_back() {
        let session = session();
        let state = ListsState {
            lists: vec![TodoList::new(ListId::new(1), "Work".to_string())],
        };

        session.save(&state).await.unwrap();

        assert_eq!(session.load().await.unwrap(), state);
    }

    #[tokio::test]
    async fn flash_is_taken_once() {
        let session = session();
        session.set_flash(Flash::success("Saved")).await.unwrap();

        assert_eq!(
            session.take_flash().await.unwrap(),
            Some(Flash::success("Saved"))
        );
        assert_eq!(session.take_flash().await.unwrap(), None);
    }
}
