//! Reducer logic for session lists.
//!
//! Every command is first validated against an immutable view of the state,
//! producing either an event or a [`ListError`]. Only events are applied, so a
//! rejected command cannot leave partial changes behind.

use crate::error::ListError;
use crate::reducer::Reducer;
use crate::types::{ListId, ListsAction, ListsEvent, ListsState, TodoId, TodoItem, TodoList};

/// Shortest accepted list or todo name, in characters
pub const NAME_MIN_CHARS: usize = 1;

/// Longest accepted list or todo name, in characters
pub const NAME_MAX_CHARS: usize = 100;

/// Whether `name` has an accepted length once trimmed
#[must_use]
pub fn name_length_valid(name: &str) -> bool {
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name.trim().chars().count())
}

/// Reducer for a session's lists
#[derive(Clone, Copy, Debug, Default)]
pub struct ListsReducer;

impl ListsReducer {
    /// Creates a new `ListsReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a list name for creation or renaming.
    ///
    /// `renaming` is excluded from the uniqueness check so a list may be
    /// "renamed" to the name it already has.
    fn validate_list_name(
        state: &ListsState,
        name: &str,
        renaming: Option<ListId>,
    ) -> Result<(), ListError> {
        if !name_length_valid(name) {
            return Err(ListError::InvalidListName);
        }

        if state.name_taken(name, renaming) {
            return Err(ListError::DuplicateName);
        }

        Ok(())
    }

    fn find_list(state: &ListsState, id: ListId) -> Result<&TodoList, ListError> {
        state.list(id).ok_or(ListError::ListNotFound(id))
    }

    fn find_todo(list: &TodoList, todo_id: TodoId) -> Result<&TodoItem, ListError> {
        list.todo(todo_id).ok_or(ListError::TodoNotFound {
            list_id: list.id,
            todo_id,
        })
    }

    /// Validates a command and decides which event it produces
    fn decide(state: &ListsState, action: ListsAction) -> Result<ListsEvent, ListError> {
        match action {
            ListsAction::CreateList { name } => {
                let name = name.trim();
                Self::validate_list_name(state, name, None)?;
                Ok(ListsEvent::ListCreated {
                    id: state.next_list_id(),
                    name: name.to_string(),
                })
            }

            ListsAction::RenameList { id, name } => {
                Self::find_list(state, id)?;
                let name = name.trim();
                Self::validate_list_name(state, name, Some(id))?;
                Ok(ListsEvent::ListRenamed {
                    id,
                    name: name.to_string(),
                })
            }

            ListsAction::DeleteList { id } => {
                Self::find_list(state, id)?;
                Ok(ListsEvent::ListDeleted { id })
            }

            ListsAction::AddTodo { list_id, name } => {
                let list = Self::find_list(state, list_id)?;
                let name = name.trim();
                if !name_length_valid(name) {
                    return Err(ListError::InvalidTodoName);
                }
                Ok(ListsEvent::TodoAdded {
                    list_id,
                    todo_id: list.next_todo_id(),
                    name: name.to_string(),
                })
            }

            ListsAction::DeleteTodo { list_id, todo_id } => {
                let list = Self::find_list(state, list_id)?;
                Self::find_todo(list, todo_id)?;
                Ok(ListsEvent::TodoDeleted { list_id, todo_id })
            }

            ListsAction::SetTodoCompletion {
                list_id,
                todo_id,
                completed,
            } => {
                let list = Self::find_list(state, list_id)?;
                Self::find_todo(list, todo_id)?;
                Ok(ListsEvent::TodoCompletionSet {
                    list_id,
                    todo_id,
                    completed,
                })
            }

            ListsAction::CompleteAll { list_id } => {
                Self::find_list(state, list_id)?;
                Ok(ListsEvent::AllTodosCompleted { list_id })
            }
        }
    }

    /// Applies an event to state
    fn apply_event(state: &mut ListsState, event: &ListsEvent) {
        match event {
            ListsEvent::ListCreated { id, name } => {
                state.lists.push(TodoList::new(*id, name.clone()));
            }
            ListsEvent::ListRenamed { id, name } => {
                if let Some(list) = state.list_mut(*id) {
                    list.name.clone_from(name);
                }
            }
            ListsEvent::ListDeleted { id } => {
                state.lists.retain(|list| list.id != *id);
            }
            ListsEvent::TodoAdded {
                list_id,
                todo_id,
                name,
            } => {
                if let Some(list) = state.list_mut(*list_id) {
                    list.todos.push(TodoItem::new(*todo_id, name.clone()));
                }
            }
            ListsEvent::TodoDeleted { list_id, todo_id } => {
                if let Some(list) = state.list_mut(*list_id) {
                    list.todos.retain(|todo| todo.id != *todo_id);
                }
            }
            ListsEvent::TodoCompletionSet {
                list_id,
                todo_id,
                completed,
            } => {
                if let Some(todo) = state
                    .list_mut(*list_id)
                    .and_then(|list| list.todo_mut(*todo_id))
                {
                    todo.completed = *completed;
                }
            }
            ListsEvent::AllTodosCompleted { list_id } => {
                if let Some(list) = state.list_mut(*list_id) {
                    for todo in &mut list.todos {
                        todo.completed = true;
                    }
                }
            }
        }
    }
}

impl Reducer for ListsReducer {
    type State = ListsState;
    type Action = ListsAction;
    type Event = ListsEvent;
    type Error = ListError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
    ) -> Result<Self::Event, Self::Error> {
        let event = Self::decide(state, action)?;
        Self::apply_event(state, &event);
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_bounds() {
        assert!(!name_length_valid(""));
        assert!(!name_length_valid("   "));
        assert!(name_length_valid("a"));
        assert!(name_length_valid(&"a".repeat(100)));
        assert!(!name_length_valid(&"a".repeat(101)));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 100 two-byte characters
        assert!(name_length_valid(&"é".repeat(100)));
    }

    #[test]
    fn surrounding_whitespace_is_not_counted() {
        let padded = format!("  {}  ", "a".repeat(100));
        assert!(name_length_valid(&padded));
    }
}
