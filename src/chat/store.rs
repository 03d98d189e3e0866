use std::collections::HashMap;

use crate::chat::error::ChatError;
use crate::chat::models::MessageBatch;
use crate::openai::Message;

/// In-memory log of serialized message batches keyed by session ID.
/// Batches are kept in the exact order they were appended so that
/// flattening them reconstructs the conversation.
#[derive(Default)]
pub struct MessageStore {
    sessions: HashMap<String, Vec<MessageBatch>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sure the session exists in the store. Never touches an
    /// already-existing sequence.
    pub fn ensure(&mut self, session_id: &str) {
        self.sessions.entry(session_id.to_string()).or_default();
    }

    /// Appends a batch to the end of the session's log, creating the
    /// session if needed.
    pub fn append(&mut self, session_id: &str, batch: MessageBatch) {
        self.sessions
            .entry(session_id.to_string())
            .or_default()
            .push(batch);
    }

    /// Resets the session's log to empty. Safe for sessions that were
    /// never created.
    pub fn clear(&mut self, session_id: &str) {
        self.sessions.insert(session_id.to_string(), Vec::new());
    }

    pub fn batch_count(&self, session_id: &str) -> usize {
        self.sessions.get(session_id).map_or(0, Vec::len)
    }

    /// Returns the session's full conversation history by decoding
    /// each stored batch in insertion order and concatenating the
    /// results. A batch that fails to decode fails the whole call; no
    /// partial history is ever returned. The returned messages are a
    /// fresh copy, detached from the store.
    pub fn history(&mut self, session_id: &str) -> Result<Vec<Message>, ChatError> {
        self.ensure(session_id);

        let mut messages = Vec::new();
        for batch in &self.sessions[session_id] {
            let decoded = batch
                .decode()
                .map_err(|source| ChatError::Deserialization {
                    session_id: session_id.to_string(),
                    source,
                })?;
            messages.extend(decoded);
        }

        Ok(messages)
    }
}
