pub mod read;
pub mod write;

pub use read::{find_message, list_messages, messages_in_conversation};
pub use write::{insert_message, update_status};
