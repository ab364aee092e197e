//! UI Components
//!
//! Leptos components rendering board state and forwarding user intents to the store.

mod add_task_modal;
mod board_column;
mod delete_confirm_button;
mod login_page;
mod sidebar;
mod task_card;

pub use add_task_modal::AddTaskModal;
pub use board_column::BoardColumn;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use sidebar::Sidebar;
pub use task_card::TaskCard;
