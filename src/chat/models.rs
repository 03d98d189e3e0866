//! The core models for managing a stateful chat with an LLM.
use anyhow::Result;

use crate::openai::Message;

/// An ordered sequence of messages forming one side-channel view of a
/// conversation. Used to assemble the outbound message list for a
/// model call.
#[derive(Default)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn new_with_messages(messages: Vec<Message>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> Vec<Message> {
        self.0.clone()
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn extend(&mut self, msgs: Vec<Message>) {
        self.0.extend(msgs)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}

/// The serialized set of messages produced by a single model turn,
/// stored as an opaque blob. Decoding all of a session's batches in
/// insertion order reconstructs the full conversation history.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageBatch(String);

impl MessageBatch {
    pub fn encode(messages: &[Message]) -> Result<Self> {
        Ok(Self(serde_json::to_string(messages)?))
    }

    pub fn decode(&self) -> Result<Vec<Message>, serde_json::Error> {
        serde_json::from_str(&self.0)
    }

    /// Wraps a raw serialized payload without validating it. Decoding
    /// may fail later if the payload is not a valid message list.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::Role;

    #[test]
    fn test_batch_round_trip() {
        let messages = vec![
            Message::new(Role::User, "Hello"),
            Message::new(Role::Assistant, "Hi! How can I help?"),
        ];

        let batch = MessageBatch::encode(&messages).unwrap();
        let decoded = batch.decode().unwrap();

        assert_eq!(decoded, messages);
    }

    #[test]
    fn test_batch_round_trip_empty() {
        let batch = MessageBatch::encode(&[]).unwrap();
        assert_eq!(batch.decode().unwrap(), Vec::<Message>::new());
    }

    #[test]
    fn test_batch_decode_rejects_garbage() {
        let batch = MessageBatch::from_raw("not json at all");
        assert!(batch.decode().is_err());
    }

    #[test]
    fn test_transcript_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::new(Role::User, "first"));
        transcript.push(Message::new(Role::Assistant, "second"));

        let contents: Vec<String> = transcript.iter().map(|m| m.content.clone()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }
}
