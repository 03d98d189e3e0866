use thiserror::Error;

/// Errors raised by the chat session core. Transport and model API
/// failures are not enumerated here; they propagate as `anyhow::Error`
/// from the call sites that hit them.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("unknown persona kind: {0}")]
    InvalidPersonaKind(String),

    #[error("no active persona; select a persona before asking")]
    NoActivePersona,

    #[error("failed to decode a stored message batch for session {session_id}")]
    Deserialization {
        session_id: String,
        #[source]
        source: serde_json::Error,
    },
}
