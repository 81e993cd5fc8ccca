mod error_message;
mod loading_spinner;
mod summary_card;
mod todo_form;
mod todo_list;

pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use summary_card::SummaryCard;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
