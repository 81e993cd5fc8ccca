use dioxus::prelude::*;

use crate::api::{self, Todo};
use crate::components::{ErrorMessage, LoadingSpinner, SummaryCard, TodoForm, TodoList};

/// Refetches the full todo list; the UI never patches it locally.
async fn reload_todos(mut todos: Signal<Vec<Todo>>, mut error: Signal<Option<String>>) {
    match api::fetch_todos().await {
        Ok(list) => todos.set(list),
        Err(_) => error.set(Some("Failed to fetch todos. Please try again.".to_string())),
    }
}

/// The single page of the application: list, creation form, and on-demand
/// summary.
#[component]
pub fn Home() -> Element {
    let todos = use_signal(Vec::<Todo>::new);
    let mut creating = use_signal(|| false);
    let mut summarizing = use_signal(|| false);
    let mut summary = use_signal(|| None::<String>);
    let error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);

    // Load the todo list on mount.
    use_effect(move || {
        spawn(async move {
            reload_todos(todos, error).await;
        });
    });

    let handle_create = move |(title, description): (String, String)| {
        let mut error = error;
        spawn(async move {
            creating.set(true);
            match api::create_todo(&title, &description).await {
                Ok(_) => {
                    notice.set(Some("Task added successfully".to_string()));
                    reload_todos(todos, error).await;
                }
                Err(_) => error.set(Some("Failed to add task. Please try again.".to_string())),
            }
            creating.set(false);
        });
    };

    let handle_delete = move |id: i32| {
        let mut error = error;
        spawn(async move {
            match api::delete_todo(id).await {
                Ok(_) => {
                    notice.set(Some("Task deleted successfully".to_string()));
                    reload_todos(todos, error).await;
                }
                Err(_) => error.set(Some("Failed to delete task. Please try again.".to_string())),
            }
        });
    };

    let handle_summarize = move |_| {
        let mut error = error;
        spawn(async move {
            summarizing.set(true);
            summary.set(None);
            match api::summarize().await {
                Ok(response) => {
                    // Prefer the generated summary, fall back to the message.
                    summary.set(Some(
                        response.summary.unwrap_or_else(|| response.message.clone()),
                    ));
                    notice.set(Some("Summary has been sent to Slack".to_string()));
                }
                Err(_) => {
                    error.set(Some("Failed to summarize tasks. Please try again.".to_string()))
                }
            }
            summarizing.set(false);
        });
    };

    rsx! {
        main { class: "app",
            header { class: "app-header",
                h1 { "Todo Summary Assistant" }
                p { "Track tasks and send an AI summary to Slack" }
            }

            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }
            if let Some(message) = error() {
                ErrorMessage { message }
            }

            TodoForm { busy: creating(), on_create: handle_create }

            TodoList { todos: todos(), on_delete: handle_delete }

            div { class: "summarize-controls",
                button {
                    class: "summarize-button",
                    disabled: summarizing(),
                    onclick: handle_summarize,
                    if summarizing() { "Summarizing..." } else { "Summarize & Send to Slack" }
                }
            }

            if summarizing() {
                LoadingSpinner { message: "Generating summary...".to_string() }
            } else if let Some(text) = summary() {
                SummaryCard { summary: text }
            }
        }
    }
}
