use dioxus::prelude::*;

use crate::api::Todo;

/// List of current todos with a delete action per entry.
#[component]
pub fn TodoList(todos: Vec<Todo>, on_delete: EventHandler<i32>) -> Element {
    rsx! {
        if todos.is_empty() {
            p { class: "todo-list-empty", "No tasks yet. Add one above." }
        } else {
            ul { class: "todo-list",
                {todos.iter().map(|todo| {
                    let id = todo.id;
                    rsx! {
                        li { key: "{id}", class: "todo-item",
                            div { class: "todo-item-body",
                                span { class: "todo-item-title", "{todo.title}" }
                                if let Some(description) = todo.description.as_deref() {
                                    if !description.is_empty() {
                                        p { class: "todo-item-description", "{description}" }
                                    }
                                }
                            }
                            button {
                                class: "todo-item-delete",
                                onclick: move |_| on_delete.call(id),
                                "Delete"
                            }
                        }
                    }
                })}
            }
        }
    }
}
