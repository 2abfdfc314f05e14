//! One-shot status messages.
//!
//! A [`Flash`] is written to the session right before a redirect and taken
//! out again by the next page render. Pages that re-render a form in place
//! pass their flash straight to the view instead.

use listkeeper_core::{ListError, ListsEvent};
use serde::{Deserialize, Serialize};

/// Whether a flash reports success or a problem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// Something was saved
    Success,
    /// Something was rejected
    Error,
}

/// A status message shown on exactly one rendered page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Banner style
    pub kind: FlashKind,
    /// Message text
    pub message: String,
}

impl Flash {
    /// A success banner
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// An error banner
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// The confirmation for an accepted command, if it has one.
    ///
    /// Checking a single todo on or off is silent.
    #[must_use]
    pub fn for_event(event: &ListsEvent) -> Option<Self> {
        let message = match event {
            ListsEvent::ListCreated { .. } => "The list has been created.",
            ListsEvent::ListRenamed { .. } => "The list has been updated.",
            ListsEvent::ListDeleted { .. } => "The list has been deleted.",
            ListsEvent::TodoAdded { .. } => "The todo has been added.",
            ListsEvent::TodoDeleted { .. } => "The todo has been deleted.",
            ListsEvent::AllTodosCompleted { .. } => "All the todos have been completed.",
            ListsEvent::TodoCompletionSet { .. } => return None,
        };
        Some(Self::success(message))
    }
}

impl From<&ListError> for Flash {
    fn from(error: &ListError) -> Self {
        Self::error(error.to_string())
    }
}
