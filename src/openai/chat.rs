use anyhow::{Error, Result, bail};

use crate::openai::{Message, Role, completion};

/// Runs the next turn in chat by passing the accumulated transcript
/// to the LLM for the next response. Returns only the messages
/// produced by this turn.
pub async fn chat(
    history: &Vec<Message>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Vec<Message>, Error> {
    let resp = completion(history, api_hostname, api_key, model).await?;

    if let Some(msg) = resp["choices"][0]["message"]["content"].as_str() {
        Ok(vec![Message::new(Role::Assistant, msg)])
    } else {
        bail!("No message received. Resp:\n\n {}", resp)
    }
}
