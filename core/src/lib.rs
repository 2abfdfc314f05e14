//! # Listkeeper Core
//!
//! Pure domain logic for a session-scoped todo list manager.
//!
//! The web shell loads a [`ListsState`] out of the user's session, hands it
//! to [`ListsReducer`] together with a [`ListsAction`], and writes the state
//! back. Nothing in this crate performs I/O.
//!
//! ## Core Concepts
//!
//! - **State**: [`ListsState`], the ordered lists owned by one session
//! - **Action**: [`ListsAction`], a command requested by the user
//! - **Event**: [`ListsEvent`], the fact produced by a successful command
//! - **Reducer**: `(State, Action) → Result<Event, Error>`
//!
//! A rejected command never touches the state: validation runs against an
//! immutable borrow and only the resulting event is applied.
//!
//! ## Example
//!
//! ```
//! use listkeeper_core::{ListsAction, ListsEvent, ListsReducer, ListsState, Reducer};
//!
//! let mut state = ListsState::new();
//! let event = ListsReducer::new()
//!     .reduce(&mut state, ListsAction::CreateList { name: "Groceries".into() })
//!     .unwrap();
//!
//! assert!(matches!(event, ListsEvent::ListCreated { .. }));
//! assert_eq!(state.lists.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod lists;
pub mod types;
pub mod view;

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(State, Action) → Result<Event, Error>`.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// Implementations must leave `state` untouched when they return `Err`.
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The command type this reducer processes
    /// - `Event`: What a successful command produced
    /// - `Error`: Why a command was rejected
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The event type produced by an accepted action
        type Event;

        /// The error type produced by a rejected action
        type Error;

        /// Reduce an action into a state change
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action fails validation; the state
        /// is left exactly as it was.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
        ) -> Result<Self::Event, Self::Error>;
    }
}

pub use error::{ErrorKind, ListError};
pub use lists::ListsReducer;
pub use reducer::Reducer;
pub use types::{ListId, ListsAction, ListsEvent, ListsState, TodoId, TodoItem, TodoList};
