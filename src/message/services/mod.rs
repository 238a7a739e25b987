//! Application services for message delivery.

mod send_message;

pub use send_message::SendMessageService;
