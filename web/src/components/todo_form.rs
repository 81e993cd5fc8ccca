use dioxus::prelude::*;

/// Creation form for a new todo. Emits the entered title and description and
/// clears itself; the parent owns the actual API call.
#[component]
pub fn TodoForm(busy: bool, on_create: EventHandler<(String, String)>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);

    let submit = move |_| {
        if title().trim().is_empty() {
            return;
        }
        on_create.call((title(), description()));
        title.set(String::new());
        description.set(String::new());
    };

    rsx! {
        div { class: "todo-form",
            input {
                class: "todo-form-title",
                placeholder: "Task title",
                value: "{title}",
                oninput: move |evt| title.set(evt.value()),
            }
            textarea {
                class: "todo-form-description",
                placeholder: "Description (optional)",
                value: "{description}",
                oninput: move |evt| description.set(evt.value()),
            }
            button {
                class: "todo-form-submit",
                disabled: busy,
                onclick: submit,
                if busy { "Adding..." } else { "Add Task" }
            }
        }
    }
}
