//! Errors produced when a command is rejected.

use crate::types::{ListId, TodoId};
use thiserror::Error;

/// Why a [`ListsAction`](crate::ListsAction) was rejected.
///
/// The `Display` text is the user-facing message shown in the flash banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// List name outside the accepted length range
    #[error("List name must be between 1 and 100 characters.")]
    InvalidListName,

    /// Todo name outside the accepted length range
    #[error("Todo must be between 1 and 100 characters.")]
    InvalidTodoName,

    /// Another list in the session already has this name
    #[error("List name must be unique.")]
    DuplicateName,

    /// No list with the given id exists in the session
    #[error("The specified list was not found.")]
    ListNotFound(ListId),

    /// The list exists but has no todo with the given id
    #[error("The specified todo was not found.")]
    TodoNotFound {
        /// Owning list
        list_id: ListId,
        /// Missing todo
        todo_id: TodoId,
    },
}

/// Coarse classification of a [`ListError`], used to pick a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The submitted form was invalid; re-render it
    Validation,
    /// A referenced list or todo does not exist; redirect away
    NotFound,
}

impl ErrorKind {
    /// Stable lowercase label, suitable for metrics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
        }
    }
}

impl ListError {
    /// Returns the kind of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidListName | Self::InvalidTodoName | Self::DuplicateName => {
                ErrorKind::Validation
            }
            Self::ListNotFound(_) | Self::TodoNotFound { .. } => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ListError::InvalidListName.to_string(),
            "List name must be between 1 and 100 characters."
        );
        assert_eq!(
            ListError::ListNotFound(ListId::new(3)).to_string(),
            "The specified list was not found."
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(ListError::DuplicateName.kind(), ErrorKind::Validation);
        assert_eq!(ListError::InvalidTodoName.kind(), ErrorKind::Validation);
        assert_eq!(
            ListError::TodoNotFound {
                list_id: ListId::new(1),
                todo_id: TodoId::new(1),
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
    }
}
