mod core;
mod error;
mod models;
mod persona;
mod store;

pub use self::core::{Chat, ChatBuilder, ChatTurn};
pub use error::ChatError;
pub use models::{MessageBatch, Transcript};
pub use persona::{PERSONAS, Persona, lookup};
pub use store::MessageStore;
