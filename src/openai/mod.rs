mod chat;
mod core;

pub use chat::chat;
pub use core::{Message, Role, completion};
