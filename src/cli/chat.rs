use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use uuid::Uuid;

use crate::chat::{Chat, ChatBuilder, lookup};
use crate::core::config::AppConfig;
use crate::openai::Role;

pub fn print_history(chat: &mut Chat, session_id: &str) -> Result<()> {
    println!("\nConversation History:");
    for message in chat.history(session_id)? {
        let role = match message.role() {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        println!("{}: {}", role, message.content);
    }
    Ok(())
}

pub async fn run(session_id: Option<String>) -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let persona = lookup("assistant")
        .expect("Default persona missing from registry")
        .clone();
    let mut chat = ChatBuilder::new(
        &config.openai_api_hostname,
        &config.openai_api_key,
        &config.openai_model,
    )
    .persona(persona)
    .build();

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

    print_history(&mut chat, &session_id)?;

    Ok(())
}
