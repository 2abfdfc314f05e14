//! Domain types for session-scoped todo lists.
//!
//! A session owns an ordered sequence of [`TodoList`]s, each owning an ordered
//! sequence of [`TodoItem`]s. Both are addressed by monotonically assigned
//! integer ids, never by position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw id
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw id
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Returns the id following this one
            #[must_use]
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

integer_id!(
    /// Identifier of a list, unique within a session
    ListId
);

integer_id!(
    /// Identifier of a todo, unique within its list
    TodoId
);

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Identifier within the owning list
    pub id: TodoId,
    /// What needs doing
    pub name: String,
    /// Whether the todo has been checked off
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, incomplete todo
    #[must_use]
    pub const fn new(id: TodoId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }
}

/// A named, ordered collection of todos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Identifier within the session
    pub id: ListId,
    /// Display name, unique within the session
    pub name: String,
    /// Todos in insertion order
    pub todos: Vec<TodoItem>,
}

impl TodoList {
    /// Creates a new list with no todos
    #[must_use]
    pub const fn new(id: ListId, name: String) -> Self {
        Self {
            id,
            name,
            todos: Vec::new(),
        }
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn todo(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Returns a mutable todo by ID
    pub fn todo_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    /// The id the next added todo will receive: highest existing id + 1, or 1
    #[must_use]
    pub fn next_todo_id(&self) -> TodoId {
        self.todos
            .iter()
            .map(|todo| todo.id)
            .max()
            .unwrap_or(TodoId::new(0))
            .next()
    }
}

/// Everything a session knows about its lists
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsState {
    /// Lists in creation order
    pub lists: Vec<TodoList>,
}

impl ListsState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Returns a list by ID
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id == id)
    }

    /// Returns a mutable list by ID
    pub fn list_mut(&mut self, id: ListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// The id the next created list will receive: highest existing id + 1, or 1
    #[must_use]
    pub fn next_list_id(&self) -> ListId {
        self.lists
            .iter()
            .map(|list| list.id)
            .max()
            .unwrap_or(ListId::new(0))
            .next()
    }

    /// Whether another list already uses `name`.
    ///
    /// `except` is skipped so a list can keep its own name when renamed.
    #[must_use]
    pub fn name_taken(&self, name: &str, except: Option<ListId>) -> bool {
        self.lists
            .iter()
            .any(|list| Some(list.id) != except && list.name == name)
    }
}

/// Commands a user can issue against their lists
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListsAction {
    /// Create a new, empty list
    CreateList {
        /// Requested name (trimmed before validation)
        name: String,
    },

    /// Change a list's name
    RenameList {
        /// List to rename
        id: ListId,
        /// Requested name (trimmed before validation)
        name: String,
    },

    /// Remove a list and all of its todos
    DeleteList {
        /// List to delete
        id: ListId,
    },

    /// Append a todo to a list
    AddTodo {
        /// Owning list
        list_id: ListId,
        /// Requested name (trimmed before validation)
        name: String,
    },

    /// Remove a todo from a list
    DeleteTodo {
        /// Owning list
        list_id: ListId,
        /// Todo to delete
        todo_id: TodoId,
    },

    /// Check or uncheck a todo
    SetTodoCompletion {
        /// Owning list
        list_id: ListId,
        /// Todo to update
        todo_id: TodoId,
        /// New completion flag
        completed: bool,
    },

    /// Check off every todo in a list
    CompleteAll {
        /// List to complete
        list_id: ListId,
    },
}

/// Facts produced by accepted commands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListsEvent {
    /// A list was created
    ListCreated {
        /// Assigned identifier
        id: ListId,
        /// Stored name
        name: String,
    },

    /// A list was renamed
    ListRenamed {
        /// Renamed list
        id: ListId,
        /// Stored name
        name: String,
    },

    /// A list was deleted
    ListDeleted {
        /// Deleted list
        id: ListId,
    },

    /// A todo was appended to a list
    TodoAdded {
        /// Owning list
        list_id: ListId,
        /// Assigned identifier
        todo_id: TodoId,
        /// Stored name
        name: String,
    },

    /// A todo was removed
    TodoDeleted {
        /// Owning list
        list_id: ListId,
        /// Deleted todo
        todo_id: TodoId,
    },

    /// A todo's completion flag was set
    TodoCompletionSet {
        /// Owning list
        list_id: ListId,
        /// Updated todo
        todo_id: TodoId,
        /// New completion flag
        completed: bool,
    },

    /// Every todo in a list was checked off
    AllTodosCompleted {
        /// Completed list
        list_id: ListId,
    },
}

impl ListsEvent {
    /// The list this event concerns
    #[must_use]
    pub const fn list_id(&self) -> ListId {
        match self {
            Self::ListCreated { id, .. }
            | Self::ListRenamed { id, .. }
            | Self::ListDeleted { id } => *id,
            Self::TodoAdded { list_id, .. }
            | Self::TodoDeleted { list_id, .. }
            | Self::TodoCompletionSet { list_id, .. }
            | Self::AllTodosCompleted { list_id } => *list_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn list_with_todos(id: u64, todo_ids: &[u64]) -> TodoList {
        let mut list = TodoList::new(ListId::new(id), format!("List {id}"));
        for &todo_id in todo_ids {
            list.todos
                .push(TodoItem::new(TodoId::new(todo_id), format!("Todo {todo_id}")));
        }
        list
    }

    #[test]
    fn ids_parse_and_display() {
        let id: ListId = "42".parse().unwrap();
        assert_eq!(id, ListId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<TodoId>().is_err());
        assert!("-1".parse::<TodoId>().is_err());
    }

    #[test]
    fn next_list_id_defaults_to_one() {
        assert_eq!(ListsState::new().next_list_id(), ListId::new(1));
    }

    #[test]
    fn next_list_id_follows_highest_id_not_count() {
        let state = ListsState {
            lists: vec![list_with_todos(5, &[]), list_with_todos(2, &[])],
        };
        assert_eq!(state.next_list_id(), ListId::new(6));
    }

    #[test]
    fn next_todo_id_follows_highest_id() {
        assert_eq!(list_with_todos(1, &[]).next_todo_id(), TodoId::new(1));
        assert_eq!(list_with_todos(1, &[3, 1]).next_todo_id(), TodoId::new(4));
    }

    #[test]
    fn name_taken_skips_excepted_list() {
        let state = ListsState {
            lists: vec![list_with_todos(1, &[])],
        };
        assert!(state.name_taken("List 1", None));
        assert!(!state.name_taken("List 1", Some(ListId::new(1))));
        assert!(!state.name_taken("list 1", None));
    }

    #[test]
    fn lookups_by_id() {
        let mut state = ListsState {
            lists: vec![list_with_todos(1, &[1, 2]), list_with_todos(3, &[])],
        };
        assert!(state.list(ListId::new(2)).is_none());
        assert_eq!(state.list(ListId::new(3)).unwrap().name, "List 3");

        let list = state.list_mut(ListId::new(1)).unwrap();
        list.todo_mut(TodoId::new(2)).unwrap().completed = true;
        assert!(list.todo(TodoId::new(2)).unwrap().completed);
        assert!(list.todo(TodoId::new(9)).is_none());
    }

    #[test]
    fn state_serializes_ids_as_plain_integers() {
        let state = ListsState {
            lists: vec![list_with_todos(1, &[2])],
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["lists"][0]["id"], 1);
        assert_eq!(json["lists"][0]["todos"][0]["id"], 2);

        let back: ListsState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn event_reports_its_list() {
        let event = ListsEvent::TodoDeleted {
            list_id: ListId::new(7),
            todo_id: TodoId::new(1),
        };
        assert_eq!(event.list_id(), ListId::new(7));
    }
}
