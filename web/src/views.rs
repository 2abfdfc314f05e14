//! HTML pages rendered with Liquid.
//!
//! Templates are compiled once at startup and shared through
//! [`AppState`](crate::AppState). Every page is rendered into the shared
//! layout, which owns the flash banner. Templates escape all user text.

use crate::flash::Flash;
use liquid::{Parser, ParserBuilder, Template};
use listkeeper_core::view::{
    count_completed, count_remaining, list_css_class, sort_lists, sort_todos, todo_css_class,
};
use listkeeper_core::{ListsState, TodoItem, TodoList};
use serde::Serialize;

const LAYOUT: &str = include_str!("../templates/layout.liquid");
const LISTS: &str = include_str!("../templates/lists.liquid");
const NEW_LIST: &str = include_str!("../templates/new_list.liquid");
const EDIT_LIST: &str = include_str!("../templates/edit_list.liquid");
const LIST: &str = include_str!("../templates/list.liquid");

/// Compiled page templates
pub struct Views {
    layout: Template,
    lists: Template,
    new_list: Template,
    edit_list: Template,
    list: Template,
}

/// A list as shown on the index page
#[derive(Serialize)]
struct ListSummary<'a> {
    id: u64,
    name: &'a str,
    class: Option<&'static str>,
    remaining: usize,
    total: usize,
}

impl<'a> From<&'a TodoList> for ListSummary<'a> {
    fn from(list: &'a TodoList) -> Self {
        Self {
            id: list.id.get(),
            name: &list.name,
            class: list_css_class(list),
            remaining: count_remaining(&list.todos),
            total: list.todos.len(),
        }
    }
}

/// A todo as shown on its list's page
#[derive(Serialize)]
struct TodoRow<'a> {
    id: u64,
    name: &'a str,
    completed: bool,
    class: Option<&'static str>,
}

impl<'a> From<&'a TodoItem> for TodoRow<'a> {
    fn from(todo: &'a TodoItem) -> Self {
        Self {
            id: todo.id.get(),
            name: &todo.name,
            completed: todo.completed,
            class: todo_css_class(todo),
        }
    }
}

#[derive(Serialize)]
struct ListsPage<'a> {
    lists: Vec<ListSummary<'a>>,
}

#[derive(Serialize)]
struct NameForm<'a> {
    list_name: &'a str,
}

#[derive(Serialize)]
struct EditPage<'a> {
    list: ListSummary<'a>,
    list_name: &'a str,
}

#[derive(Serialize)]
struct ListPage<'a> {
    list: ListSummary<'a>,
    todos: Vec<TodoRow<'a>>,
    completed: usize,
    todo: &'a str,
}

#[derive(Serialize)]
struct Layout<'a> {
    title: &'a str,
    flash: Option<&'a Flash>,
    content: String,
}

impl Views {
    /// Compiles every page template.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to parse.
    pub fn new() -> Result<Self, liquid::Error> {
        let parser: Parser = ParserBuilder::with_stdlib().build()?;
        Ok(Self {
            layout: parser.parse(LAYOUT)?,
            lists: parser.parse(LISTS)?,
            new_list: parser.parse(NEW_LIST)?,
            edit_list: parser.parse(EDIT_LIST)?,
            list: parser.parse(LIST)?,
        })
    }

    /// All lists, unfinished ones first.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn lists_page(
        &self,
        lists: &ListsState,
        flash: Option<&Flash>,
    ) -> Result<String, liquid::Error> {
        let page = ListsPage {
            lists: sort_lists(&lists.lists).into_iter().map(ListSummary::from).collect(),
        };
        let content = self.lists.render(&liquid::to_object(&page)?)?;
        self.wrap("Lists", flash, content)
    }

    /// The create-list form, optionally prefilled with a rejected name.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn new_list_page(
        &self,
        list_name: &str,
        flash: Option<&Flash>,
    ) -> Result<String, liquid::Error> {
        let content = self
            .new_list
            .render(&liquid::to_object(&NameForm { list_name })?)?;
        self.wrap("New list", flash, content)
    }

    /// The rename form for `list`, prefilled with `list_name`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn edit_list_page(
        &self,
        list: &TodoList,
        list_name: &str,
        flash: Option<&Flash>,
    ) -> Result<String, liquid::Error> {
        let page = EditPage {
            list: ListSummary::from(list),
            list_name,
        };
        let content = self.edit_list.render(&liquid::to_object(&page)?)?;
        self.wrap("Edit list", flash, content)
    }

    /// One list with its todos, open todos first.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn list_page(
        &self,
        list: &TodoList,
        todo: &str,
        flash: Option<&Flash>,
    ) -> Result<String, liquid::Error> {
        let page = ListPage {
            list: ListSummary::from(list),
            todos: sort_todos(&list.todos).into_iter().map(TodoRow::from).collect(),
            completed: count_completed(&list.todos),
            todo,
        };
        let content = self.list.render(&liquid::to_object(&page)?)?;
        self.wrap(&list.name, flash, content)
    }

    fn wrap(
        &self,
        title: &str,
        flash: Option<&Flash>,
        content: String,
    ) -> Result<String, liquid::Error> {
        let layout = Layout {
            title,
            flash,
            content,
        };
        self.layout.render(&liquid::to_object(&layout)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use listkeeper_core::{ListId, TodoId};

    fn views() -> Views {
        Views::new().unwrap()
    }

    fn groceries() -> TodoList {
        TodoList {
            id: ListId::new(4),
            name: "Groceries".to_string(),
            todos: vec![
                TodoItem {
                    id: TodoId::new(1),
                    name: "Milk".to_string(),
                    completed: true,
                },
                TodoItem::new(TodoId::new(2), "Eggs".to_string()),
            ],
        }
    }

    #[test]
    fn templates_compile() {
        let _ = views();
    }

    #[test]
    fn lists_page_shows_remaining_counts() {
        let state = ListsState {
            lists: vec![groceries()],
        };
        let html = views().lists_page(&state, None).unwrap();
        assert!(html.contains("Groceries"));
        assert!(html.contains("1 / 2"));
        assert!(html.contains("/lists/4"));
    }

    #[test]
    fn list_page_puts_completed_todos_last() {
        let html = views().list_page(&groceries(), "", None).unwrap();
        let eggs = html.find("Eggs").unwrap();
        let milk = html.find("Milk").unwrap();
        assert!(eggs < milk);
    }

    #[test]
    fn user_text_is_escaped() {
        let mut list = groceries();
        list.name = "<script>alert(1)</script>".to_string();
        let html = views().list_page(&list, "", None).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn flash_is_rendered_in_layout() {
        let flash = Flash::error("List name must be unique.");
        let html = views().new_list_page("Work", Some(&flash)).unwrap();
        assert!(html.contains("List name must be unique."));
        assert!(html.contains("flash error"));
        assert!(html.contains("value=\"Work\""));
    }
}
