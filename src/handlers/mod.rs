// Handlers module

pub mod conversation_messages;
pub mod create_message;
pub mod list_messages;
pub mod update_status;

pub use conversation_messages::conversation_messages_handler;
pub use create_message::create_message_handler;
pub use list_messages::list_messages_handler;
pub use update_status::update_status_handler;
