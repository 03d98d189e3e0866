use anyhow::{Error, Result};

use super::error::ChatError;
use super::models::{MessageBatch, Transcript};
use super::persona::{self, Persona};
use super::store::MessageStore;
use crate::openai::{Message, Role, chat};

/// The core abstraction around a stateful chat with an LLM using an
/// OpenAI compatible API.
///
/// Keeps an in-memory, per-session log of message batches and replays
/// it as the model's context window on every turn. Supports the
/// following features:
/// - Rolling conversation history per session ID
/// - Runtime persona switching, which rebinds the system instruction
///   and invalidates the session's history
///
/// Use `ChatBuilder::new()` to construct a valid `Chat`.
pub struct Chat {
    api_hostname: String,
    api_key: String,
    model: String,
    store: MessageStore,
    persona: Option<Persona>,
}

/// The result of a single turn: the assistant's reply plus exactly
/// the messages this turn produced, excluding prior history.
#[derive(Debug)]
pub struct ChatTurn {
    pub content: String,
    new_messages: Vec<Message>,
}

impl ChatTurn {
    pub fn new_messages(&self) -> &[Message] {
        &self.new_messages
    }

    pub fn new_messages_batch(&self) -> Result<MessageBatch> {
        MessageBatch::encode(&self.new_messages)
    }
}

impl Chat {
    /// Runs the next turn in chat for `session_id`: replays the
    /// session's history plus the active persona's system instruction,
    /// sends `user_message` to the LLM, and on success stores the
    /// turn's new messages as a single batch.
    ///
    /// The append happens only after a successful model response, so a
    /// failed call leaves the store exactly as it was.
    pub async fn ask(&mut self, user_message: &str, session_id: &str) -> Result<ChatTurn, Error> {
        let persona = self.persona.as_ref().ok_or(ChatError::NoActivePersona)?;

        // The system instruction is prepended per call and never
        // stored, so the log holds only user/assistant turns.
        let mut transcript = Transcript::new_with_messages(vec![Message::new(
            Role::System,
            persona.system_instruction,
        )]);
        transcript.extend(self.store.history(session_id)?);

        let user_msg = Message::new(Role::User, user_message);
        transcript.push(user_msg.clone());

        tracing::debug!(
            "session {}: sending {} messages to {}",
            session_id,
            transcript.messages().len(),
            self.model
        );

        let reply = chat(
            &transcript.messages(),
            &self.api_hostname,
            &self.api_key,
            &self.model,
        )
        .await?;

        let content = reply.last().map(|m| m.content.clone()).unwrap_or_default();

        let mut new_messages = vec![user_msg];
        new_messages.extend(reply);

        let batch = MessageBatch::encode(&new_messages)?;
        self.store.append(session_id, batch);

        Ok(ChatTurn {
            content,
            new_messages,
        })
    }

    /// Makes `key`'s persona the active one and clears `session_id`'s
    /// history. Prior turns were conditioned on a different system
    /// instruction and are invalid context for the new persona. Other
    /// sessions are untouched; an unknown key mutates nothing.
    pub fn switch_persona(
        &mut self,
        key: &str,
        session_id: &str,
    ) -> Result<&'static Persona, ChatError> {
        let persona =
            persona::lookup(key).ok_or_else(|| ChatError::InvalidPersonaKind(key.to_string()))?;
        self.persona = Some(persona.clone());
        self.store.clear(session_id);
        Ok(persona)
    }

    /// The full decoded conversation history for `session_id`.
    pub fn history(&mut self, session_id: &str) -> Result<Vec<Message>, ChatError> {
        self.store.history(session_id)
    }

    pub fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }
}

pub struct ChatBuilder {
    api_hostname: String,
    api_key: String,
    model: String,
    persona: Option<Persona>,
}

impl ChatBuilder {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        ChatBuilder {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            persona: None,
        }
    }

    pub fn build(self) -> Chat {
        Chat {
            api_hostname: self.api_hostname,
            api_key: self.api_key,
            model: self.model,
            store: MessageStore::new(),
            persona: self.persona,
        }
    }

    pub fn persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }
}
