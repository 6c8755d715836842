// Handlers module

pub mod chat;
pub mod portfolio;

pub use chat::{get_chat_handler, regenerate_handler, send_message_handler};
pub use portfolio::get_portfolio_handler;
