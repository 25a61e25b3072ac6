pub mod chat;
pub mod health;
pub mod ui;

pub use chat::{chat, chat_with_context};
pub use health::health_check;
pub use ui::chat_interface;
