use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use uuid::Uuid;

use super::chat::print_history;
use crate::chat::{Chat, ChatBuilder, ChatError, PERSONAS};
use crate::core::config::AppConfig;

/// Prompts until the user picks a valid persona key, binds it, and
/// clears the session's history. Returns false when input is closed
/// before a selection is made.
fn select_persona(rl: &mut DefaultEditor, chat: &mut Chat, session_id: &str) -> Result<bool> {
    println!("Select a persona:");
    for persona in PERSONAS {
        println!("  {:<10} {}", persona.key, persona.display_name);
    }

    loop {
        let readline = rl.readline("persona> ");
        match readline {
            Ok(line) => {
                let key = line.trim();
                if key.is_empty() {
                    continue;
                }
                match chat.switch_persona(key, session_id) {
                    Ok(persona) => {
                        println!("Now chatting with {}", persona.display_name);
                        return Ok(true);
                    }
                    Err(err @ ChatError::InvalidPersonaKind(_)) => {
                        // Nothing was mutated; let the user try again
                        println!("{}", err);
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Err(ReadlineError::Interrupted) => return Ok(false),
            Err(ReadlineError::Eof) => return Ok(false),
            Err(err) => return Err(err.into()),
        }
    }
}

pub async fn run(session_id: Option<String>) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut chat = ChatBuilder::new(
        &config.openai_api_hostname,
        &config.openai_api_key,
        &config.openai_model,
    )
    .build();

    if !select_persona(&mut rl, &mut chat, &session_id)? {
        return Ok(());
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" {
                    break;
                }
                // Switching personas drops the session's history since
                // prior turns were conditioned on another instruction
                if line == "switch" {
                    if !select_persona(&mut rl, &mut chat, &session_id)? {
                        break;
                    }
                    continue;
                }
                if line == "history" {
                    print_history(&mut chat, &session_id)?;
                    continue;
                }
                let turn = chat.ask(line, &session_id).await?;
                println!("{}", turn.content);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
