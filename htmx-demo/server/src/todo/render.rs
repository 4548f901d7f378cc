//! HTML fragments for to-do items.
//!
//! Every interpolated value goes through askama's HTML escaper, so titles
//! cannot inject markup into the page.

use askama::Template;

use crate::todo::TodoItem;

#[derive(Template)]
#[template(path = "todo/todo_item.html")]
struct TodoItemTemplate<'a> {
    item: &'a TodoItem,
}

impl<'a> TodoItemTemplate<'a> {
    pub fn new(item: &'a TodoItem) -> Self {
        Self { item }
    }
}

/// Renders a single `<li>` fragment carrying the item's toggle and delete actions.
pub fn render_item(item: &TodoItem) -> askama::Result<String> {
    TodoItemTemplate::new(item).render()
}

/// Renders each item in order and concatenates the fragments.
///
/// An empty collection renders to an empty string.
pub fn render_collection(items: &[TodoItem]) -> askama::Result<String> {
    items.iter().map(render_item).collect()
}
