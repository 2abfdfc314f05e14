//! Presentation helpers.
//!
//! Pure functions used when rendering lists and todos. None of them reorder
//! or otherwise touch the stored collections.

use crate::types::{TodoItem, TodoList};

/// CSS class applied to lists and todos that are done
pub const COMPLETE_CLASS: &str = "complete";

/// Number of checked-off todos
#[must_use]
pub fn count_completed(todos: &[TodoItem]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

/// Number of todos still to do
#[must_use]
pub fn count_remaining(todos: &[TodoItem]) -> usize {
    todos.len() - count_completed(todos)
}

/// True when there is at least one todo and all of them are checked off
#[must_use]
pub fn all_complete(todos: &[TodoItem]) -> bool {
    !todos.is_empty() && todos.iter().all(|todo| todo.completed)
}

/// Class marking a finished list
#[must_use]
pub fn list_css_class(list: &TodoList) -> Option<&'static str> {
    all_complete(&list.todos).then_some(COMPLETE_CLASS)
}

/// Class marking a checked-off todo
#[must_use]
pub const fn todo_css_class(todo: &TodoItem) -> Option<&'static str> {
    if todo.completed {
        Some(COMPLETE_CLASS)
    } else {
        None
    }
}

/// Lists for display: unfinished lists first, each group keeping its order
#[must_use]
pub fn sort_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    let mut sorted: Vec<&TodoList> = lists.iter().collect();
    // `sort_by_key` is stable
    sorted.sort_by_key(|list| all_complete(&list.todos));
    sorted
}

/// Todos for display: open todos first, each group keeping its order
#[must_use]
pub fn sort_todos(todos: &[TodoItem]) -> Vec<&TodoItem> {
    let mut sorted: Vec<&TodoItem> = todos.iter().collect();
    sorted.sort_by_key(|todo| todo.completed);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListId, TodoId};

    fn todo(id: u64, completed: bool) -> TodoItem {
        TodoItem {
            id: TodoId::new(id),
            name: format!("Todo {id}"),
            completed,
        }
    }

    fn list(id: u64, todos: Vec<TodoItem>) -> TodoList {
        TodoList {
            id: ListId::new(id),
            name: format!("List {id}"),
            todos,
        }
    }

    #[test]
    fn counts() {
        let todos = vec![todo(1, true), todo(2, false), todo(3, false)];
        assert_eq!(count_completed(&todos), 1);
        assert_eq!(count_remaining(&todos), 2);
        assert_eq!(count_completed(&[]), 0);
        assert_eq!(count_remaining(&[]), 0);
    }

    #[test]
    fn empty_list_is_not_complete() {
        assert!(!all_complete(&[]));
        assert_eq!(list_css_class(&list(1, vec![])), None);
    }

    #[test]
    fn fully_checked_list_is_complete() {
        let done = list(1, vec![todo(1, true), todo(2, true)]);
        assert!(all_complete(&done.todos));
        assert_eq!(list_css_class(&done), Some("complete"));

        let partial = list(2, vec![todo(1, true), todo(2, false)]);
        assert_eq!(list_css_class(&partial), None);
    }

    #[test]
    fn todo_class_follows_completion() {
        assert_eq!(todo_css_class(&todo(1, true)), Some("complete"));
        assert_eq!(todo_css_class(&todo(1, false)), None);
    }

    #[test]
    fn sort_lists_moves_complete_lists_last_stably() {
        let lists = vec![
            list(1, vec![todo(1, false)]),
            list(2, vec![todo(1, true)]),
            list(3, vec![]),
            list(4, vec![todo(1, true), todo(2, true)]),
            list(5, vec![todo(1, true), todo(2, false)]),
        ];
        let ids: Vec<u64> = sort_lists(&lists).iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn sort_todos_moves_completed_last_stably() {
        let todos = vec![todo(1, false), todo(2, true), todo(3, false), todo(4, true)];
        let ids: Vec<u64> = sort_todos(&todos).iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn sorting_leaves_stored_order_alone() {
        let todos = vec![todo(1, true), todo(2, false)];
        let _ = sort_todos(&todos);
        assert_eq!(todos[0].id, TodoId::new(1));
    }
}
